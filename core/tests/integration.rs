//! Full CRUD lifecycle test against the live todo server.
//!
//! Starts the server on a random port, then exercises every core client
//! operation over real HTTP using ureq.

use todo_core::{ApiError, HttpMethod, HttpResponse, TodoClient, TodoInput};
use todo_server::TodoStore;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses are
/// returned as data, letting the core client interpret the status.
fn execute(req: todo_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse::new(status, body)
}

/// Start a server with a fresh store on an ephemeral port; returns its base URL.
fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, TodoStore::shared(), std::future::pending()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn crud_lifecycle() {
    let client = TodoClient::new(&spawn_server());

    // list: empty.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // create.
    let input = TodoInput {
        title: "buy milk".to_string(),
        completed: false,
    };
    let req = client.build_create_todo(&input).unwrap();
    let id = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(id, 1);

    // get.
    let req = client.build_get_todo(id);
    let fetched = client.parse_get_todo(execute(req)).unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.title, "buy milk");
    assert!(!fetched.completed);

    // update.
    let input = TodoInput {
        title: "buy milk".to_string(),
        completed: true,
    };
    let req = client.build_update_todo(id, &input).unwrap();
    client.parse_update_todo(execute(req)).unwrap();

    let req = client.build_get_todo(id);
    let fetched = client.parse_get_todo(execute(req)).unwrap();
    assert!(fetched.completed);

    // list: one item.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert_eq!(todos, vec![fetched]);

    // delete.
    let req = client.build_delete_todo(id);
    client.parse_delete_todo(execute(req)).unwrap();

    // get after delete: NotFound.
    let req = client.build_get_todo(id);
    let err = client.parse_get_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // delete again: NotFound.
    let req = client.build_delete_todo(id);
    let err = client.parse_delete_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // update after delete: NotFound.
    let req = client.build_update_todo(id, &input).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // the next ID is fresh.
    let req = client.build_create_todo(&input).unwrap();
    assert_eq!(client.parse_create_todo(execute(req)).unwrap(), 2);
}

#[test]
fn rejected_requests_surface_server_reason() {
    let base = spawn_server();

    let req = todo_core::HttpRequest {
        method: HttpMethod::Get,
        url: format!("{base}/api/todo?id=abc"),
        headers: Vec::new(),
        body: None,
    };
    let err = TodoClient::new(&base).parse_get_todo(execute(req)).unwrap_err();
    match err {
        ApiError::BadRequest(reason) => assert_eq!(reason, "Invalid 'id' parameter"),
        other => panic!("unexpected error: {other:?}"),
    }

    let req = todo_core::HttpRequest {
        method: HttpMethod::Post,
        url: format!("{base}/api/todos"),
        headers: Vec::new(),
        body: None,
    };
    let response = execute(req);
    assert_eq!(response.status, 405);
    assert_eq!(response.body, "Method not allowed\n");
}
