use std::cell::RefCell;
use std::io::{Cursor, sink};

use actix_web::{App, HttpServer, web};
use pushkind_blog::client::console::Prompt;
use pushkind_blog::client::notify::{
    DELETE_SUCCESS_MESSAGE, FETCH_FAILURE_MESSAGE, GENERIC_FAILURE_MESSAGE,
};
use pushkind_blog::client::{
    BlogApi, DeleteOutcome, DisplayState, HttpBlogApi, Level, ListController, Notifier,
};
use pushkind_blog::domain::blog::NewBlog;
use pushkind_blog::domain::types::{BlogDate, BlogDescription, BlogId, BlogTitle};
use pushkind_blog::repository::{BlogWriter, DieselRepository};
use pushkind_blog::routes::configure;

mod common;

#[derive(Default)]
struct RecordingNotifier {
    messages: RefCell<Vec<(Level, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

fn seed(repo: &DieselRepository, count: usize) {
    for n in 1..=count {
        repo.create_blog(&NewBlog::new(
            BlogTitle::new(format!("Blog #{n}")).unwrap(),
            BlogDescription::new(format!(
                "A fairly long body for blog number {n}, long enough to be cut"
            ))
            .unwrap(),
            None,
            BlogDate::new("2024-01-01").unwrap(),
        ))
        .unwrap();
    }
}

/// Starts the backend on an ephemeral port and returns its base URL.
fn spawn_backend(repo: DieselRepository) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .configure(configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

#[actix_web::test]
async fn test_http_api_talks_to_backend() {
    let test_db = common::TestDb::new("test_http_api_talks_to_backend.db");
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo, 7);
    let api = HttpBlogApi::new(&spawn_backend(repo)).unwrap();

    assert_eq!(api.fetch_all().await.unwrap().len(), 7);

    let window = api.fetch_range(5, 10).await.unwrap();
    let ids: Vec<i32> = window.iter().map(|blog| blog.id.get()).collect();
    assert_eq!(ids, vec![6, 7]);

    let blog = api.fetch_one(BlogId::new(3).unwrap()).await.unwrap();
    assert_eq!(blog.title.as_str(), "Blog #3");

    assert!(api.fetch_one(BlogId::new(99).unwrap()).await.is_err());

    api.delete(BlogId::new(3).unwrap()).await.unwrap();
    assert_eq!(api.fetch_all().await.unwrap().len(), 6);
}

#[actix_web::test]
async fn test_controller_pages_and_deletes() {
    let test_db = common::TestDb::new("test_controller_pages_and_deletes.db");
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo, 12);
    let api = HttpBlogApi::new(&spawn_backend(repo)).unwrap();
    let prompt = Prompt::new(Cursor::new(b"y\n".to_vec()), sink());
    let notifier = RecordingNotifier::default();
    let controller = ListController::new(api, &prompt, &notifier, 5);

    controller.mount().await;
    assert_eq!(controller.display_state(), DisplayState::Populated);
    assert_eq!(controller.items().len(), 5);
    assert_eq!(controller.page_view().strip(), "[1] 2 3");

    controller.next_page().await;
    controller.next_page().await;
    assert_eq!(controller.current_page(), 2);
    assert_eq!(controller.items().len(), 2);
    assert!(controller.next_page().await.is_none());

    let outcome = controller.handle_delete(BlogId::new(11).unwrap()).await;
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(controller.current_page(), 0);
    assert_eq!(controller.items().len(), 5);
    assert_eq!(controller.state().total_count, Some(11));
    assert_eq!(
        notifier.messages.borrow().as_slice(),
        &[(Level::Success, DELETE_SUCCESS_MESSAGE.to_string())]
    );

    let first = &controller.items()[0];
    assert!(controller.excerpt(first.description.as_str()).ends_with(" ... "));
}

#[actix_web::test]
async fn test_controller_reports_unreachable_backend() {
    // Nothing listens on port 9 of the loopback interface.
    let api = HttpBlogApi::new("http://127.0.0.1:9").unwrap();
    let prompt = Prompt::new(Cursor::new(Vec::new()), sink());
    let notifier = RecordingNotifier::default();
    let controller = ListController::new(api, &prompt, &notifier, 5);

    controller.mount().await;

    assert_eq!(controller.display_state(), DisplayState::Empty);
    let messages = notifier.messages.borrow();
    assert!(messages.contains(&(Level::Error, FETCH_FAILURE_MESSAGE.to_string())));
    assert!(messages.contains(&(Level::Error, GENERIC_FAILURE_MESSAGE.to_string())));
}
