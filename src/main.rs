//! Gallery - local photo capture and persistence
//!
//! Command-line front end:
//! ```text
//! gallery list               print the saved photos as JSON
//! gallery capture <image>    add an image file to the gallery
//! gallery remove <filepath>  delete a photo and its file
//! ```

use std::sync::Arc;

use gallery::capabilities::ImportCamera;
use gallery::{AppState, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: gallery <list | capture <image> | remove <filepath>>";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gallery=debug,gallery_storage=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, argument) = match args.as_slice() {
        [command] => (command.as_str(), None),
        [command, argument] => (command.as_str(), Some(argument.as_str())),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let config = gallery::config::init();
    tracing::debug!("Loaded configuration: {:?}", config);

    let state = AppState::new().await?;

    let photos = match (command, argument) {
        ("list", None) => state.store.load().await?,
        ("capture", Some(image)) => {
            let gallery = state.gallery(Arc::new(ImportCamera::new(image)));
            gallery.load_saved().await?;
            gallery.take_photo().await?
        }
        ("remove", Some(filepath)) => {
            state.store.load().await?;
            state.store.remove(filepath).await?;
            state.store.photos().await
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    println!("{}", serde_json::to_string_pretty(&photos)?);

    Ok(())
}
