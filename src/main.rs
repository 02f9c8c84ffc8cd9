use pets_api::{Application, HttpRuntime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Application::run(HttpRuntime, std::env::args().skip(1).collect())?;
    Ok(())
}
