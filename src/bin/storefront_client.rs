use dotenvy::dotenv;
use storefront::client::{HttpStoreApi, Storefront};
use storefront::config::api_url_from_env;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands: list | add <product id> | order | help | quit";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let api_url = api_url_from_env();
    let mut store = Storefront::new(HttpStoreApi::new(&api_url));

    if let Err(e) = store.load_products().await {
        log::warn!("Could not load products from {}: {}", api_url, e);
    }
    println!("{}", store.render());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("list"), _) => println!("{}", store.render()),
            (Some("add"), Some(raw_id)) => {
                let product = raw_id
                    .parse::<i64>()
                    .ok()
                    .and_then(|id| store.product(id).cloned());
                match product {
                    Some(product) => {
                        store.add_to_cart(product);
                        println!("{}", store.render());
                    }
                    None => println!("No product with id '{}'", raw_id),
                }
            }
            (Some("order"), _) if store.cart().is_empty() => println!("Your cart is empty."),
            (Some("order"), _) => match store.place_order().await {
                Ok(_) => println!("{}", store.render()),
                Err(e) => log::warn!("Could not place order: {}", e),
            },
            (Some("quit") | Some("exit"), _) => break,
            (None, _) => {}
            _ => println!("{}", HELP),
        }
    }
    Ok(())
}
