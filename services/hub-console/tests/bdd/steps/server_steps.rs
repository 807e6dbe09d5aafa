//! BDD step definitions for the console web server

use cucumber::{given, then, when};
use hub_console::{serve, Config};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::world::ConsoleWorld;

#[given(expr = "a console server configured for device API {string}")]
async fn console_server(world: &mut ConsoleWorld, api_base_url: String) {
    let mut config = Config::default();
    config.api.base_url = api_base_url;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    world.server_url = Some(format!("http://{}", listener.local_addr().unwrap()));

    let cancel = CancellationToken::new();
    let cancel_for_server = cancel.clone();
    world.server_cancel = Some(cancel);
    world.server_task = Some(tokio::spawn(async move {
        serve(listener, &config, cancel_for_server).await
    }));
}

#[when(expr = "{string} is requested from the console server")]
async fn request_path(world: &mut ConsoleWorld, path: String) {
    let url = format!(
        "{}{}",
        world.server_url.as_ref().expect("server not started"),
        path
    );
    let response = reqwest::get(&url).await.expect("request failed");
    world.response_status = Some(response.status().as_u16());
    world.response_body = Some(response.text().await.expect("body read failed"));
}

#[when("the console server is shut down")]
fn shut_down(world: &mut ConsoleWorld) {
    world
        .server_cancel
        .as_ref()
        .expect("server not started")
        .cancel();
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut ConsoleWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut ConsoleWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then("the console server should stop cleanly")]
async fn server_stops(world: &mut ConsoleWorld) {
    let task = world.server_task.take().expect("server not started");
    let result = task.await.expect("server task panicked");
    assert!(result.is_ok(), "server returned {:?}", result);
}
