#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn main() {
    if let Err(e) = portfolio_cms::start().await {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
