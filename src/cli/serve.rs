use crate::server;

pub async fn serve() {
    server::start_api_server().await;
}
