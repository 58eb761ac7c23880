#[actix_web::main]
async fn main() -> std::io::Result<()> {
    qa_buddy_lib::app::run().await
}
