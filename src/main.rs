use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use tokio_util::sync::CancellationToken;
use tracing::info;

use alliance_live::args::{self, Command};
use alliance_live::controller::board_cache::BoardRegistry;
use alliance_live::controller::cms::client_for;
use alliance_live::controller::score::{index, scores};
use alliance_live::{logging, tv};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    let client = client_for(&args.source)?;

    match args.command {
        Command::Serve { bind } => {
            logging::init_stdout();
            let registry = BoardRegistry::new(client, CancellationToken::new());
            let registry_for_web = registry.clone();
            let sweeper = registry.spawn_sweeper();

            info!(%bind, "starting leaderboard server");
            HttpServer::new(move || {
                App::new()
                    .app_data(Data::new(registry_for_web.clone()))
                    .route("/", web::get().to(index))
                    .route("/scores", web::get().to(scores))
                    .route("/health", web::get().to(HttpResponse::Ok))
                    .service(Files::new("/static", "./static"))
            })
            .bind(&bind)?
            .run()
            .await?;

            registry.shutdown();
            sweeper.await?;
        }
        Command::Tv {
            event,
            scroll_speed,
            log_dir,
        } => {
            let _guard = logging::init_file(&log_dir);
            tv::run(client, event, scroll_speed).await?;
        }
    }
    Ok(())
}
