//! Terminal front end for the blog list.
//!
//! Commands: `n` next page, `p` previous page, `r` reload, `v <id>` view a
//! blog, `d <id>` delete a blog, `q` quit.

use dotenvy::dotenv;

use pushkind_blog::client::console::{ConsoleNotifier, Prompt, parse_id};
use pushkind_blog::client::{BlogApi, Confirm, DisplayState, HttpBlogApi, ListController, Notifier};
use pushkind_blog::domain::blog::Blog;
use pushkind_blog::models::config::{self, ClientConfig};

fn render<A, C, N>(controller: &ListController<A, C, N>)
where
    A: BlogApi,
    C: Confirm,
    N: Notifier,
{
    match controller.display_state() {
        DisplayState::Loading => println!("Loading..."),
        DisplayState::Empty => println!("No blogs yet."),
        DisplayState::Populated => {
            let view = controller.page_view();
            for blog in &view.items {
                println!(
                    "#{} {} — {}",
                    blog.id,
                    blog.title,
                    controller.excerpt(blog.description.as_str())
                );
            }
            println!("{}", view.strip());
        }
    }
}

fn render_detail(blog: &Blog) {
    println!("#{} {}", blog.id, blog.title);
    if let Some(date) = &blog.date {
        println!("{date}");
    }
    if let Some(image_url) = &blog.image_url {
        println!("{image_url}");
    }
    println!();
    println!("{}", blog.description);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let client_config = match config::load::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let api = match HttpBlogApi::new(&client_config.api_base_url) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Error building HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let prompt = Prompt::stdio();
    let controller = ListController::new(api, &prompt, ConsoleNotifier, client_config.page_limit);

    controller.mount().await;
    render(&controller);

    loop {
        let line = match prompt.read_line("> ") {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Failed to read command: {err}");
                break;
            }
        };

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("n") => {
                if controller.next_page().await.is_none() {
                    println!("Already on the last page.");
                }
                render(&controller);
            }
            Some("p") => {
                if controller.previous_page().await.is_none() {
                    println!("Already on the first page.");
                }
                render(&controller);
            }
            Some("r") => {
                controller.reload().await;
                render(&controller);
            }
            Some("v") => match parse_id(parts.next()) {
                Some(id) => {
                    if let Some(blog) = controller.open(id).await {
                        render_detail(&blog);
                    }
                }
                None => println!("Usage: v <id>"),
            },
            Some("d") => match parse_id(parts.next()) {
                Some(id) => {
                    controller.handle_delete(id).await;
                    render(&controller);
                }
                None => println!("Usage: d <id>"),
            },
            Some("q") => break,
            Some(other) => {
                println!("Unknown command `{other}`. Use n, p, r, v <id>, d <id> or q.")
            }
            None => {}
        }
    }
}
