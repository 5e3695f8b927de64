#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use ocfp_db_sqlite::Connections;

mod web;

pub async fn run(connections: Connections, enable_cors: bool) {
    web::run(connections.into(), enable_cors).await;
}
