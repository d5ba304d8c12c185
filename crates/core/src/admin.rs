//! Administrative view model.
//!
//! [`AdminConsole`] holds everything the admin page shows: the last fetched
//! product snapshot, the active filter and page, the editor with its draft,
//! and the known image URLs. Transitions that need the store return a
//! [`Command`] for the caller to execute; the caller then reports the outcome
//! (`saved`, `deleted`, `failed`) and reloads the snapshot with `load`.
//!
//! The visible table is always recomputed by [`project_admin_page`] from the
//! snapshot, so filter and page changes never touch the store.

use crate::form::ProductForm;
use crate::image_urls::KnownImageUrls;
use crate::notice::Notice;
use crate::product::{CreateProduct, Product, ProductPatch};
use crate::types::ProductId;

/// Rows per admin table page.
pub const ADMIN_PAGE_SIZE: usize = 5;

/// Default lower bound of the admin price filter.
pub const PRICE_FILTER_MIN: f64 = 50.0;

/// Default upper bound of the admin price filter.
pub const PRICE_FILTER_MAX: f64 = 350_000.0;

// ---------------------------------------------------------------------------
// Filtering and pagination
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityFilter {
    #[default]
    All,
    Public,
    Hidden,
}

impl VisibilityFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            VisibilityFilter::All => "all",
            VisibilityFilter::Public => "public",
            VisibilityFilter::Hidden => "hidden",
        }
    }

    /// Parse a filter value. Anything unrecognised means "all".
    pub fn parse(value: &str) -> Self {
        match value {
            "public" => VisibilityFilter::Public,
            "hidden" => VisibilityFilter::Hidden,
            _ => VisibilityFilter::All,
        }
    }

    pub fn matches(self, product: &Product) -> bool {
        match self {
            VisibilityFilter::All => true,
            VisibilityFilter::Public => product.visibility,
            VisibilityFilter::Hidden => !product.visibility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdminFilter {
    pub visibility: VisibilityFilter,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for AdminFilter {
    fn default() -> Self {
        Self {
            visibility: VisibilityFilter::All,
            min_price: PRICE_FILTER_MIN,
            max_price: PRICE_FILTER_MAX,
        }
    }
}

impl AdminFilter {
    /// Inclusive on both price bounds.
    pub fn matches(&self, product: &Product) -> bool {
        self.visibility.matches(product)
            && product.price >= self.min_price
            && product.price <= self.max_price
    }
}

/// One rendered page of the admin table.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminPage<'a> {
    pub items: Vec<&'a Product>,
    /// Page actually shown, after clamping to `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    /// Number of products passing the filter across all pages.
    pub matching: usize,
}

impl AdminPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn total_pages(matching: usize) -> usize {
    matching.div_ceil(ADMIN_PAGE_SIZE).max(1)
}

/// Filter `products` in their original order and slice out `page`.
pub fn project_admin_page<'a>(
    products: &'a [Product],
    filter: &AdminFilter,
    page: usize,
) -> AdminPage<'a> {
    let filtered: Vec<&Product> = products.iter().filter(|p| filter.matches(p)).collect();
    let matching = filtered.len();
    let total_pages = total_pages(matching);
    let page = page.clamp(1, total_pages);
    let items = filtered
        .into_iter()
        .skip((page - 1) * ADMIN_PAGE_SIZE)
        .take(ADMIN_PAGE_SIZE)
        .collect();

    AdminPage {
        items,
        page,
        total_pages,
        matching,
    }
}

// ---------------------------------------------------------------------------
// Console state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Editor {
    #[default]
    Closed,
    Create,
    Edit(ProductId),
}

/// Store operation requested by a console transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create(CreateProduct),
    Update(ProductId, ProductPatch),
    Delete(ProductId),
}

#[derive(Debug, Clone, Default)]
pub struct AdminConsole {
    products: Vec<Product>,
    filter: AdminFilter,
    page: usize,
    editor: Editor,
    form: ProductForm,
    viewing: Option<Product>,
    image_urls: KnownImageUrls,
    notice: Option<Notice>,
}

impl AdminConsole {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    // -- snapshot ----------------------------------------------------------

    /// Replace the snapshot with a fresh fetch.
    pub fn load(&mut self, products: Vec<Product>) {
        self.image_urls.remember_all(&products);
        self.products = products;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    // -- filter / pagination -------------------------------------------------

    pub fn filter(&self) -> &AdminFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: AdminFilter) {
        self.filter = filter;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_view(&self) -> AdminPage<'_> {
        project_admin_page(&self.products, &self.filter, self.page)
    }

    // -- editor ------------------------------------------------------------

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn open_add(&mut self) {
        self.form = ProductForm::default();
        self.editor = Editor::Create;
    }

    pub fn open_edit(&mut self, product: &Product) {
        self.form = ProductForm::from_product(product);
        self.editor = Editor::Edit(product.id.clone());
    }

    /// Close without saving. The draft is kept until the editor is reopened.
    pub fn cancel(&mut self) {
        self.editor = Editor::Closed;
    }

    /// Command for the open editor, or `None` when it is closed.
    pub fn submit(&self) -> Option<Command> {
        match &self.editor {
            Editor::Closed => None,
            Editor::Create => Some(Command::Create(self.form.to_create())),
            Editor::Edit(id) => Some(Command::Update(id.clone(), self.form.to_patch())),
        }
    }

    /// Record a successful submit: remember the image URL, close the editor
    /// and reset the draft.
    pub fn saved(&mut self) {
        let notice = match self.editor {
            Editor::Edit(_) => Notice::Updated,
            _ => Notice::Added,
        };
        self.image_urls.remember(&self.form.image_url);
        self.editor = Editor::Closed;
        self.form = ProductForm::default();
        self.notice = Some(notice);
    }

    /// Image URLs to suggest for the current draft.
    pub fn suggestions(&self) -> Vec<&str> {
        self.image_urls.suggestions(&self.form.image_url)
    }

    pub fn image_urls(&self) -> &KnownImageUrls {
        &self.image_urls
    }

    // -- delete ------------------------------------------------------------

    /// Delete command, only once the user has confirmed.
    pub fn request_delete(&self, id: &ProductId, confirmed: bool) -> Option<Command> {
        confirmed.then(|| Command::Delete(id.clone()))
    }

    pub fn deleted(&mut self) {
        self.notice = Some(Notice::Deleted);
    }

    // -- detail panel --------------------------------------------------------

    pub fn view(&mut self, product: &Product) {
        self.viewing = Some(product.clone());
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    pub fn viewing(&self) -> Option<&Product> {
        self.viewing.as_ref()
    }

    // -- notices -----------------------------------------------------------

    /// Record a failure. Everything else stays as it was before the call.
    pub fn failed(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }
}
