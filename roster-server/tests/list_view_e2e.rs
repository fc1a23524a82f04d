//! The client list view driving a real server over HTTP

mod common;

use std::collections::HashMap;

use common::{ADMIN_EMAIL, ADMIN_PASSWORD, setup_seeded};
use roster_client::list_view::{FetchOutcome, MutationOutcome};
use roster_client::{
    ClientConfig, Department, DepartmentFilter, EmployeeApi, EmployeeForm, EmployeeListView,
    EmployeeQuery, HttpClient, Modal, NotificationKind, OfflineDirectory, Session,
};
use roster_server::{ServerState, build_app};
use shared::filter::EmployeeFilter;
use tokio::net::TcpListener;

async fn spawn_server(state: ServerState) -> ClientConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_app(state)).await.unwrap();
    });
    ClientConfig::new(format!("http://{addr}"))
}

/// Seeded server plus a logged-in client
async fn connect() -> (ClientConfig, HttpClient, Session) {
    let config = spawn_server(setup_seeded().await).await;
    let client = HttpClient::new(&config).unwrap();
    let session = client.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    (config, client, session)
}

fn john_doe_form() -> EmployeeForm {
    EmployeeForm {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john.doe@company.com".into(),
        department: "Engineering".into(),
        phone: "+1-555-9999".into(),
    }
}

#[tokio::test]
async fn test_browse_search_and_filter() {
    let (config, client, session) = connect().await;
    let view = EmployeeListView::new(client, session, &config);

    assert_eq!(view.load().await, FetchOutcome::Applied);
    let state = view.snapshot();
    assert_eq!(state.total_items, 24);
    assert_eq!(state.total_pages, 3);
    assert_eq!(state.employees.len(), 10);

    view.go_to_page(3).await;
    assert_eq!(view.snapshot().employees.len(), 4);

    view.set_search("alice").await;
    let state = view.snapshot();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_items, 1);
    assert_eq!(state.employees[0].full_name(), "Alice Chen");

    view.set_search("").await;
    view.set_department(DepartmentFilter::Only(Department::Engineering))
        .await;
    let state = view.snapshot();
    assert_eq!(state.total_items, 7);
    assert!(
        state
            .employees
            .iter()
            .all(|e| e.department == Department::Engineering)
    );
}

#[tokio::test]
async fn test_mutations_through_the_dialogs() {
    let (config, client, session) = connect().await;
    let view = EmployeeListView::new(client, session.clone(), &config);
    view.load().await;

    view.open_add();
    assert_eq!(
        view.submit_create(&john_doe_form()).await.unwrap(),
        MutationOutcome::Succeeded
    );
    let state = view.snapshot();
    assert_eq!(state.total_items, 25);
    let john = state.employees[0].clone();
    assert_eq!(john.email, "john.doe@company.com");
    assert_eq!(john.phone.as_deref(), Some("+1-555-9999"));

    view.open_add();
    assert_eq!(
        view.submit_create(&john_doe_form()).await.unwrap(),
        MutationOutcome::Failed
    );
    assert_eq!(view.snapshot().modal, Modal::Adding);
    let notification = view.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(
        notification.message,
        "An employee with email john.doe@company.com already exists"
    );
    view.cancel();

    view.open_edit(john.clone());
    let edit = EmployeeForm {
        phone: String::new(),
        ..EmployeeForm::from_employee(&john)
    };
    assert_eq!(
        view.submit_update(&edit).await.unwrap(),
        MutationOutcome::Succeeded
    );
    let stored = view.api().get_employee(&session, &john.id).await.unwrap();
    assert_eq!(stored.phone, None);
    assert_eq!(stored.first_name, "John");

    view.request_delete(john.clone());
    assert_eq!(view.confirm_delete().await, MutationOutcome::Succeeded);
    assert_eq!(view.snapshot().total_items, 24);

    let err = view.api().get_employee(&session, &john.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_on_last_page_moves_back() {
    let (config, client, session) = connect().await;
    let config = config.with_page_size(8);
    let view = EmployeeListView::new(client, session, &config);
    view.load().await;
    assert_eq!(view.snapshot().total_pages, 3);

    view.open_add();
    view.submit_create(&john_doe_form()).await.unwrap();
    view.go_to_page(4).await;
    let state = view.snapshot();
    assert_eq!(state.current_page, 4);
    assert_eq!(state.employees.len(), 1);

    view.request_delete(state.employees[0].clone());
    assert_eq!(view.confirm_delete().await, MutationOutcome::Succeeded);

    let state = view.snapshot();
    assert_eq!(state.current_page, 3);
    assert_eq!(state.total_pages, 3);
    assert_eq!(state.employees.len(), 8);
}

#[tokio::test]
async fn test_requests_without_session_are_rejected() {
    let (config, client, _) = connect().await;

    let err = client
        .list_employees(&Session::anonymous(), &EmployeeQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Authentication required"));

    let view = EmployeeListView::new(client, Session::anonymous(), &config);
    assert_eq!(view.load().await, FetchOutcome::Failed);
    assert_eq!(
        view.notification().unwrap().message,
        "Authentication required"
    );
}

#[tokio::test]
async fn test_wrong_password() {
    let config = spawn_server(setup_seeded().await).await;
    let client = HttpClient::new(&config).unwrap();

    let err = client.login(ADMIN_EMAIL, "wrong").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message_or("Login failed"), "Invalid credentials");
}

#[tokio::test]
async fn test_offline_directory_agrees_with_server() {
    let (_, client, session) = connect().await;

    let everything = client
        .list_employees(&session, &EmployeeQuery::new(EmployeeFilter::default(), 1, 100))
        .await
        .unwrap()
        .data;
    assert_eq!(everything.len(), 24);
    let mut insertion_order = everything.clone();
    insertion_order.reverse();
    let offline = OfflineDirectory::with_employees(insertion_order);

    let searches = [None, Some("a"), Some("AN"), Some("company"), Some("@"), Some("%"), Some("zz")];
    let departments = [None, Some(Department::Engineering), Some(Department::Hr)];
    for search in searches {
        for department in departments {
            for (page, limit) in [(1, 5), (2, 5), (1, 100)] {
                let query = EmployeeQuery::new(
                    EmployeeFilter::new(search.map(String::from), department),
                    page,
                    limit,
                );
                let remote = client.list_employees(&session, &query).await.unwrap();
                let local = offline.list_employees(&session, &query).await.unwrap();

                assert_eq!(remote.meta, local.meta, "{query:?}");
                let ids = |page: &[roster_client::Employee]| -> Vec<String> {
                    page.iter().map(|e| e.id.clone()).collect()
                };
                assert_eq!(ids(&remote.data), ids(&local.data), "{query:?}");
            }
        }
    }

    let by_department: HashMap<Department, usize> =
        everything.iter().fold(HashMap::new(), |mut acc, e| {
            *acc.entry(e.department).or_default() += 1;
            acc
        });
    assert_eq!(by_department[&Department::Engineering], 7);
}
