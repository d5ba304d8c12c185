//! Admin page: filter panel, product table, pagination, editor, detail
//! panel and delete confirmation.

use std::fmt::Write;

use catalog_core::admin::{AdminConsole, AdminFilter, Editor, VisibilityFilter};
use catalog_core::form::DESCRIPTION_MAX_CHARS;
use catalog_core::product::Product;

use super::{escape, layout, notice_banner, price, PLACEHOLDER_IMAGE};

/// Filter and page the admin is looking at. Carried through links and
/// mutation forms so a redirect lands back on the same slice.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminLocation {
    pub filter: AdminFilter,
    pub page: usize,
    pub show_filter: bool,
}

impl Default for AdminLocation {
    fn default() -> Self {
        Self {
            filter: AdminFilter::default(),
            page: 1,
            show_filter: false,
        }
    }
}

impl AdminLocation {
    /// Build a location from raw parameters. Unparseable values fall back to
    /// their defaults; an empty number field means zero.
    pub fn from_params(
        visibility: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
        page: Option<&str>,
        show_filter: bool,
    ) -> Self {
        let defaults = AdminFilter::default();
        Self {
            filter: AdminFilter {
                visibility: visibility.map(VisibilityFilter::parse).unwrap_or_default(),
                min_price: parse_price(min_price, defaults.min_price),
                max_price: parse_price(max_price, defaults.max_price),
            },
            page: page
                .and_then(|p| p.trim().parse::<usize>().ok())
                .unwrap_or(1)
                .max(1),
            show_filter,
        }
    }

    /// Query string (without `?`). Only numbers and fixed tokens appear, so
    /// no percent-encoding is needed.
    pub fn query(&self) -> String {
        let mut query = format!(
            "visibility={}&min_price={}&max_price={}&page={}",
            self.filter.visibility.as_str(),
            self.filter.min_price,
            self.filter.max_price,
            self.page,
        );
        if self.show_filter {
            query.push_str("&filter=true");
        }
        query
    }

    pub fn href(&self, extra: &str) -> String {
        if extra.is_empty() {
            format!("/admin?{}", self.query())
        } else {
            format!("/admin?{}&{extra}", self.query())
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Hidden inputs replaying this location inside a mutation form.
    fn hidden_inputs(&self) -> String {
        format!(
            "<input type=\"hidden\" name=\"f_visibility\" value=\"{}\">\
             <input type=\"hidden\" name=\"f_min_price\" value=\"{}\">\
             <input type=\"hidden\" name=\"f_max_price\" value=\"{}\">\
             <input type=\"hidden\" name=\"f_page\" value=\"{}\">\
             <input type=\"hidden\" name=\"f_filter\" value=\"{}\">",
            self.filter.visibility.as_str(),
            self.filter.min_price,
            self.filter.max_price,
            self.page,
            self.show_filter,
        )
    }
}

fn parse_price(raw: Option<&str>, default: f64) -> f64 {
    match raw.map(str::trim) {
        None => default,
        Some("") => 0.0,
        Some(value) => value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(default),
    }
}

/// Render the whole admin page for the console's current state.
pub fn admin_page(
    console: &AdminConsole,
    location: &AdminLocation,
    confirm_delete: Option<&Product>,
) -> String {
    let mut body = String::new();

    let filter_toggle = AdminLocation {
        show_filter: !location.show_filter,
        ..location.clone()
    };
    let _ = write!(
        body,
        "<header style=\"display:flex;justify-content:space-between;align-items:center\">\
         <h1>Product Management</h1><nav>\
         <a href=\"{add}\">+ Add New</a> | <a href=\"{toggle}\">Filter</a> | \
         <a href=\"/\">Home</a></nav></header>",
        add = escape(&location.href("editor=new")),
        toggle = escape(&filter_toggle.href("")),
    );

    body.push_str(&notice_banner(console.notice()));

    if location.show_filter {
        body.push_str(&filter_panel(location));
    }

    if let Some(product) = confirm_delete {
        body.push_str(&delete_confirmation(product, location));
    }

    body.push_str(&product_table(console, location));

    match console.editor() {
        Editor::Closed => {}
        editor => body.push_str(&editor_panel(console, editor, location)),
    }

    if let Some(product) = console.viewing() {
        body.push_str(&detail_panel(product, location));
    }

    layout("Product Management", &body)
}

fn filter_panel(location: &AdminLocation) -> String {
    let option = |value: VisibilityFilter, label: &str| {
        let selected = if location.filter.visibility == value {
            " selected"
        } else {
            ""
        };
        format!("<option value=\"{}\"{selected}>{label}</option>", value.as_str())
    };

    format!(
        "<form class=\"panel\" method=\"get\" action=\"/admin\">\
         <input type=\"hidden\" name=\"filter\" value=\"true\">\
         <input type=\"hidden\" name=\"page\" value=\"{page}\">\
         <label>Visibility: <select name=\"visibility\">{all}{public}{hidden}</select></label> \
         <label>Price: <input type=\"number\" name=\"min_price\" value=\"{min}\" \
         min=\"50\" max=\"350000\" placeholder=\"Min\"></label> - \
         <input type=\"number\" name=\"max_price\" value=\"{max}\" \
         min=\"50\" max=\"350000\" placeholder=\"Max\"> \
         <button type=\"submit\">Apply</button></form>",
        page = location.page,
        all = option(VisibilityFilter::All, "All"),
        public = option(VisibilityFilter::Public, "Public"),
        hidden = option(VisibilityFilter::Hidden, "Hidden"),
        min = location.filter.min_price,
        max = location.filter.max_price,
    )
}

fn product_table(console: &AdminConsole, location: &AdminLocation) -> String {
    let view = console.page_view();
    let mut html = String::from(
        "<table><caption>A list of your products.</caption><thead><tr>\
         <th>Image</th><th>Name</th><th>Price</th><th>Description</th>\
         <th>Visibility</th><th>Actions</th></tr></thead><tbody>",
    );

    for product in &view.items {
        let (class, label) = if product.visibility {
            ("public", "Public")
        } else {
            ("hidden", "Hidden")
        };
        let _ = write!(
            html,
            "<tr><td><img class=\"thumb\" src=\"{img}\" alt=\"{name}\"></td>\
             <td>{name}</td><td>{price}</td><td>{desc}</td>\
             <td><span class=\"badge {class}\">{label}</span></td>\
             <td><a href=\"{view}\">View</a> <a href=\"{edit}\">Edit</a> \
             <a href=\"{delete}\">Delete</a></td></tr>",
            img = escape(product.image().unwrap_or(PLACEHOLDER_IMAGE)),
            name = escape(&product.name),
            price = price(product.price),
            desc = escape(product.description.as_deref().unwrap_or_default()),
            view = escape(&location.href(&format!("view={}", product.id))),
            edit = escape(&location.href(&format!("editor={}", product.id))),
            delete = escape(&location.href(&format!("confirm_delete={}", product.id))),
        );
    }
    html.push_str("</tbody></table>");

    let page_location = location.with_page(view.page);
    let previous = if view.has_previous() {
        format!(
            "<a href=\"{}\">Previous</a>",
            escape(&page_location.with_page(view.page - 1).href(""))
        )
    } else {
        "<span aria-disabled=\"true\">Previous</span>".to_string()
    };
    let next = if view.has_next() {
        format!(
            "<a href=\"{}\">Next</a>",
            escape(&page_location.with_page(view.page + 1).href(""))
        )
    } else {
        "<span aria-disabled=\"true\">Next</span>".to_string()
    };
    let _ = write!(
        html,
        "<nav style=\"display:flex;justify-content:space-between;margin-top:1rem\">\
         {previous}<span>Page {} of {}</span>{next}</nav>",
        view.page, view.total_pages,
    );

    html
}

fn editor_panel(console: &AdminConsole, editor: &Editor, location: &AdminLocation) -> String {
    let form = console.form();
    let (title, action, submit) = match editor {
        Editor::Edit(id) => (
            "Edit Product",
            format!("/admin/products/{id}"),
            "Update Product",
        ),
        _ => (
            "Add New Product",
            "/admin/products".to_string(),
            "Create",
        ),
    };

    let suggestions: String = console
        .suggestions()
        .into_iter()
        .map(|url| format!("<option value=\"{}\">", escape(url)))
        .collect();

    let preview = if form.image_url.trim().is_empty() {
        "<span>Image preview</span>".to_string()
    } else {
        format!(
            "<img src=\"{}\" alt=\"Preview\" style=\"max-height:160px\">",
            escape(&form.image_url)
        )
    };

    let (public_selected, hidden_selected) = if form.visibility {
        (" selected", "")
    } else {
        ("", " selected")
    };

    format!(
        "<section class=\"panel\"><h2>{title}</h2>\
         <p>Create a new product or update an existing one.</p>\
         <form method=\"post\" action=\"{action}\">{hidden}\
         <h3>BASIC INFORMATION</h3>\
         <input name=\"name\" value=\"{name}\" placeholder=\"Enter product name\"> \
         <input type=\"number\" name=\"price\" value=\"{price}\" min=\"0\" step=\"any\" \
         placeholder=\"0.00\"> \
         <label>Visibility <select name=\"visibility\">\
         <option value=\"public\"{public_selected}>Visible to customers</option>\
         <option value=\"hidden\"{hidden_selected}>Hidden</option></select></label>\
         <h3>PRODUCT IMAGE</h3>\
         <input name=\"imageUrl\" value=\"{image}\" list=\"known-image-urls\" \
         placeholder=\"https://example.com/image.jpg\">\
         <datalist id=\"known-image-urls\">{suggestions}</datalist>\
         <div>{preview}</div>\
         <h3>DESCRIPTION</h3>\
         <textarea name=\"description\" maxlength=\"{max}\" rows=\"6\" cols=\"50\" \
         placeholder=\"Enter product description...\">{description}</textarea>\
         <div><small>{remaining} remaining</small></div>\
         <p><a href=\"{cancel}\">Cancel</a> <button type=\"submit\">{submit}</button></p>\
         </form></section>",
        hidden = location.hidden_inputs(),
        action = escape(&action),
        name = escape(&form.name),
        price = form.price,
        image = escape(&form.image_url),
        max = DESCRIPTION_MAX_CHARS,
        description = escape(form.description()),
        remaining = form.remaining_chars(),
        cancel = escape(&location.href("")),
    )
}

fn detail_panel(product: &Product, location: &AdminLocation) -> String {
    let (stock, visibility) = if product.visibility {
        ("Available", "Public - Visible to customers")
    } else {
        ("Hidden", "Hidden")
    };
    let badge = if product.visibility {
        "<span class=\"badge public\">In Stock</span>"
    } else {
        ""
    };

    format!(
        "<section class=\"panel\"><div style=\"display:flex;gap:1.5rem\">\
         <div><img src=\"{img}\" alt=\"{name}\" style=\"max-height:380px\"> {badge}</div>\
         <div><h2>{name}</h2><p><strong>${price:.2}</strong></p>\
         <h4>Product Description</h4><p>{desc}</p>\
         <p>Price: ${price:.2}</p><p>Stock Status: {stock}</p>\
         <p>Product Visibility: {visibility}</p>\
         <a href=\"{close}\">Close</a></div></div></section>",
        img = escape(product.image().unwrap_or("https://via.placeholder.com/400")),
        name = escape(&product.name),
        price = product.price,
        desc = escape(product.description.as_deref().unwrap_or_default()),
        close = escape(&location.href("")),
    )
}

fn delete_confirmation(product: &Product, location: &AdminLocation) -> String {
    format!(
        "<section class=\"panel\" role=\"alertdialog\"><p>Delete this product? \
         <strong>{name}</strong></p>\
         <form method=\"post\" action=\"/admin/products/{id}/delete\">{hidden}\
         <input type=\"hidden\" name=\"confirmed\" value=\"true\">\
         <a href=\"{cancel}\">Cancel</a> <button type=\"submit\">Delete</button>\
         </form></section>",
        name = escape(&product.name),
        id = product.id,
        hidden = location.hidden_inputs(),
        cancel = escape(&location.href("")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_from_params_falls_back_to_defaults() {
        let location = AdminLocation::from_params(Some("bogus"), None, Some("x"), Some("0"), false);

        assert_eq!(location.filter, AdminFilter::default());
        assert_eq!(location.page, 1);
    }

    #[test]
    fn empty_price_field_means_zero() {
        let location = AdminLocation::from_params(None, Some(""), None, None, true);
        assert_eq!(location.filter.min_price, 0.0);
        assert!(location.show_filter);
    }

    #[test]
    fn href_keeps_filter_state() {
        let location = AdminLocation::from_params(
            Some("hidden"),
            Some("100"),
            Some("900.5"),
            Some("2"),
            true,
        );
        assert_eq!(
            location.href("editor=new"),
            "/admin?visibility=hidden&min_price=100&max_price=900.5&page=2&filter=true&editor=new"
        );
    }
}
