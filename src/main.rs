#[tokio::main]
async fn main() {
    supper_club_be::start_server().await;
}
