use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let presenter_factory = fern_explorer::PixelsPresenterFactory::new();
    let command = fern_explorer::RunGuiCommand::new(presenter_factory);

    command.execute()
}
