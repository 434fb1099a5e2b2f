//! Terminal projection of a `ListResult`.
//!
//! Stateless: every branch renders from the normalized result alone, so
//! exactly one of "nothing yet", "loading", "ranked list", or "single error
//! line" is ever shown.

use toplist_core::{ListResult, ProductList};

pub fn render(result: &ListResult) -> String {
    match result {
        ListResult::Idle => String::new(),
        ListResult::Pending => "Researching products…".to_string(),
        ListResult::Success(list) => render_list(list),
        ListResult::Failure { message } => format!("Error: {message}"),
    }
}

fn render_list(list: &ProductList) -> String {
    let mut lines = Vec::new();
    lines.push(list.title.clone());
    if !list.intro.is_empty() {
        lines.push(list.intro.clone());
    }

    // Server order is the ranking.
    for (index, product) in list.products.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {}", index + 1, product.title));
        lines.push(format!("   {} | rated {}/5", product.price, product.rating));
        if !product.description.is_empty() {
            lines.push(format!("   {}", product.description));
        }
        if let Some(image_url) = &product.image_url {
            lines.push(format!("   image: {image_url}"));
        }
        lines.push(format!("   buy: {}", product.affiliate_link));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated: {} | Affiliate ID: {}",
        list.generated_at, list.affiliate_id
    ));
    lines.join("\n")
}
