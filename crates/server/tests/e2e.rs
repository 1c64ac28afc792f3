use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::routes::{self, ServerState};
use service::file::contacts::ContactStore;

fn cors() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

/// Boot a real server on an ephemeral port with an isolated store file.
async fn start_server() -> anyhow::Result<TestApp> {
    let store_path = format!("target/test-data/{}/persons.json", Uuid::new_v4());
    let contacts = ContactStore::new(&store_path).await?;
    let state = ServerState { contacts };
    let app: Router = routes::build_router(state, cors(), "build");

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_full_crud_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // empty to start
    let res = c.get(format!("{}/api/persons", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    // create
    let res = c
        .post(format!("{}/api/persons", app.base_url))
        .json(&json!({"name": "Arto Hellas", "number": "040-123456"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().expect("id assigned").to_owned();

    // repeating the same POST violates uniqueness
    let res = c
        .post(format!("{}/api/persons", app.base_url))
        .json(&json!({"name": "Arto Hellas", "number": "040-123456"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"error": "name must be unique"})
    );

    // update
    let res = c
        .put(format!("{}/api/persons/{}", app.base_url, id))
        .json(&json!({"name": "Arto Hellas", "number": "040-654321"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["number"], "040-654321");

    // delete, then the contact is gone
    let res = c
        .delete(format!("{}/api/persons/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c
        .get(format!("{}/api/persons/{}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_info_page_is_html() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    c.post(format!("{}/api/persons", app.base_url))
        .json(&json!({"name": "Ada Lovelace", "number": "39-44-5323523"}))
        .send()
        .await?;

    let res = c.get(format!("{}/info", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.text().await?;
    assert!(body.contains("Phonebook has info for 1 people"));
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_route_is_json_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/no/such/route", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"error": "unknown endpoint"})
    );
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_id_rejected_over_the_wire() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/persons/not-a-uuid", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"error": "malformatted id"})
    );
    Ok(())
}
