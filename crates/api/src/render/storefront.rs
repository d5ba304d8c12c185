use std::fmt::Write;

use catalog_core::notice::Notice;
use catalog_core::storefront::Storefront;

use super::{escape, layout, notice_banner, price, PLACEHOLDER_IMAGE};

/// Customer catalog: search box plus a card per visible product.
pub fn storefront_page(store: &Storefront, notice: Option<Notice>) -> String {
    let mut body = String::new();

    body.push_str("<h1>Products</h1>");
    body.push_str(&notice_banner(notice));
    let _ = write!(
        body,
        "<form method=\"get\" action=\"/customer\">\
         <input type=\"search\" name=\"search\" value=\"{}\" \
         placeholder=\"Search products...\" autofocus> \
         <button type=\"submit\">Search</button></form><br>",
        escape(store.query())
    );

    let results = store.results();
    if results.is_empty() {
        body.push_str("<p>No products found.</p>");
    } else {
        body.push_str("<div class=\"grid\">");
        for product in results {
            let _ = write!(
                body,
                "<article class=\"card\"><img src=\"{img}\" alt=\"{name}\" title=\"{desc}\">\
                 <div class=\"body\"><h3>{name}</h3><p>{desc}</p>\
                 <span>{price}</span> <span class=\"badge public\">Available</span>\
                 </div></article>",
                img = escape(product.image().unwrap_or(PLACEHOLDER_IMAGE)),
                name = escape(&product.name),
                desc = escape(product.description.as_deref().unwrap_or_default()),
                price = price(product.price),
            );
        }
        body.push_str("</div>");
    }

    layout("Products", &body)
}
