//! Handlers for the HTML pages.
//!
//! Every page render fetches the full product list and rebuilds the view
//! model from it. Admin mutations post back here, run the console's
//! command against the store, and redirect to `/admin` with a notice code
//! (post/redirect/get), so the next render re-fetches the list.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use catalog_core::admin::{AdminConsole, Command};
use catalog_core::error::CoreError;
use catalog_core::form::ProductForm;
use catalog_core::notice::Notice;
use catalog_core::storefront::Storefront;
use catalog_core::types::ProductId;
use catalog_db::ProductRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::render;
use crate::render::admin::AdminLocation;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters of `GET /admin`. All values are read leniently; a bad
/// value falls back to its default instead of rejecting the page.
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub visibility: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<String>,
    pub filter: Option<String>,
    /// `new`, or the id of the product to edit.
    pub editor: Option<String>,
    pub view: Option<String>,
    pub confirm_delete: Option<String>,
    pub notice: Option<String>,
}

impl AdminQuery {
    fn location(&self) -> AdminLocation {
        AdminLocation::from_params(
            self.visibility.as_deref(),
            self.min_price.as_deref(),
            self.max_price.as_deref(),
            self.page.as_deref(),
            self.filter.as_deref() == Some("true"),
        )
    }
}

/// Body of the admin create/update/delete forms. Product fields arrive as
/// raw text; `f_*` fields replay the admin location for the redirect.
#[derive(Debug, Default, Deserialize)]
pub struct AdminProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub visibility: String,
    pub confirmed: Option<String>,
    pub f_visibility: Option<String>,
    pub f_min_price: Option<String>,
    pub f_max_price: Option<String>,
    pub f_page: Option<String>,
    pub f_filter: Option<String>,
}

impl AdminProductForm {
    fn location(&self) -> AdminLocation {
        AdminLocation::from_params(
            self.f_visibility.as_deref(),
            self.f_min_price.as_deref(),
            self.f_max_price.as_deref(),
            self.f_page.as_deref(),
            self.f_filter.as_deref() == Some("true"),
        )
    }

    /// Copy the submitted fields into the editor draft.
    fn fill(&self, form: &mut ProductForm) -> Result<(), CoreError> {
        form.name = self.name.trim().to_string();
        form.set_price_input(&self.price)?;
        form.set_description(&self.description);
        form.image_url = self.image_url.trim().to_string();
        form.visibility = self.visibility != "hidden";
        Ok(())
    }

    fn confirmed(&self) -> bool {
        self.confirmed.as_deref() == Some("true")
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    #[serde(default)]
    pub search: String,
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /
pub async fn landing() -> Html<String> {
    Html(render::landing::landing_page())
}

/// GET /admin
pub async fn admin(State(state): State<AppState>, Query(query): Query<AdminQuery>) -> Html<String> {
    let location = query.location();

    let mut console = AdminConsole::new();
    console.set_filter(location.filter);
    console.set_page(location.page);

    match state.products.list_all().await {
        Ok(products) => console.load(products),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch products for admin page");
            console.failed(Notice::FetchFailed);
        }
    }

    if console.notice().is_none() {
        if let Some(notice) = query.notice.as_deref().and_then(Notice::from_code) {
            console.set_notice(notice);
        }
    }

    match query.editor.as_deref() {
        Some("new") => console.open_add(),
        Some(raw) => {
            if let Some(product) = lookup(&console, raw) {
                console.open_edit(&product);
            }
        }
        None => {}
    }

    if let Some(product) = query.view.as_deref().and_then(|raw| lookup(&console, raw)) {
        console.view(&product);
    }

    let confirm_delete = query
        .confirm_delete
        .as_deref()
        .and_then(|raw| lookup(&console, raw));

    Html(render::admin::admin_page(
        &console,
        &location,
        confirm_delete.as_ref(),
    ))
}

/// GET /customer
pub async fn customer(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
) -> Html<String> {
    let mut store = Storefront::new();
    let mut notice = None;

    match state.products.list_all().await {
        Ok(products) => store.load(products),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch products for storefront");
            notice = Some(Notice::FetchFailed);
        }
    }
    store.set_query(query.search);

    Html(render::storefront::storefront_page(&store, notice))
}

// ---------------------------------------------------------------------------
// Admin mutations
// ---------------------------------------------------------------------------

/// POST /admin/products
pub async fn admin_create(
    State(state): State<AppState>,
    Form(input): Form<AdminProductForm>,
) -> Redirect {
    let mut console = AdminConsole::new();
    console.open_add();

    let notice = save(&state, &mut console, &input).await;
    redirect(&input.location(), notice)
}

/// POST /admin/products/{id}
pub async fn admin_update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(input): Form<AdminProductForm>,
) -> Redirect {
    let mut console = AdminConsole::new();

    let opened: AppResult<_> = match ProductId::parse(&raw_id) {
        Ok(id) => state.products.find_by_id(&id).await.map_err(AppError::from),
        Err(e) => Err(AppError::from(e)),
    };
    let notice = match opened {
        Ok(Some(product)) => {
            console.open_edit(&product);
            save(&state, &mut console, &input).await
        }
        Ok(None) => {
            tracing::warn!(product_id = %raw_id, "Edit submitted for unknown product");
            Notice::SaveFailed
        }
        Err(e) => {
            log_failure(&e, "Could not open product for edit");
            Notice::SaveFailed
        }
    };

    redirect(&input.location(), notice)
}

/// POST /admin/products/{id}/delete
///
/// Only acts when the confirmation flag is set.
pub async fn admin_delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(input): Form<AdminProductForm>,
) -> Redirect {
    let location = input.location();
    let mut console = AdminConsole::new();

    let Ok(id) = ProductId::parse(&raw_id) else {
        return redirect(&location, Notice::DeleteFailed);
    };
    let Some(command) = console.request_delete(&id, input.confirmed()) else {
        return Redirect::to(&location.href(""));
    };

    match execute(state.products.as_ref(), command).await {
        Ok(()) => console.deleted(),
        Err(e) => {
            log_failure(&e, "Delete from admin page failed");
            console.failed(Notice::DeleteFailed);
        }
    }

    let notice = console.take_notice().unwrap_or(Notice::DeleteFailed);
    redirect(&location, notice)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fill the open editor from the submitted form, run its command and record
/// the outcome on the console.
async fn save(state: &AppState, console: &mut AdminConsole, input: &AdminProductForm) -> Notice {
    if let Err(e) = input.fill(console.form_mut()) {
        tracing::warn!(error = %e, "Rejected admin form");
        return Notice::SaveFailed;
    }

    let Some(command) = console.submit() else {
        return Notice::SaveFailed;
    };

    match execute(state.products.as_ref(), command).await {
        Ok(()) => console.saved(),
        Err(e) => {
            log_failure(&e, "Save from admin page failed");
            console.failed(Notice::SaveFailed);
        }
    }

    console.take_notice().unwrap_or(Notice::SaveFailed)
}

/// Run a console command against the store.
async fn execute(products: &dyn ProductRepo, command: Command) -> AppResult<()> {
    match command {
        Command::Create(input) => {
            let product = products.create(input.into_new_product()?).await?;
            tracing::info!(product_id = %product.id, "Product created from admin page");
        }
        Command::Update(id, patch) => {
            products
                .update(&id, &patch)
                .await?
                .ok_or_else(|| CoreError::NotFound {
                    entity: "Product",
                    id: id.to_string(),
                })?;
            tracing::info!(product_id = %id, "Product updated from admin page");
        }
        Command::Delete(id) => {
            if !products.delete(&id).await? {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Product",
                    id: id.to_string(),
                }));
            }
            tracing::info!(product_id = %id, "Product deleted from admin page");
        }
    }
    Ok(())
}

fn log_failure(error: &AppError, message: &'static str) {
    match error {
        AppError::Store(_) | AppError::InternalError(_) => {
            tracing::error!(error = %error, "{message}")
        }
        _ => tracing::warn!(error = %error, "{message}"),
    }
}

fn lookup(console: &AdminConsole, raw: &str) -> Option<catalog_core::product::Product> {
    let id = ProductId::parse(raw).ok()?;
    console.find(&id).cloned()
}

fn redirect(location: &AdminLocation, notice: Notice) -> Redirect {
    Redirect::to(&location.href(&format!("notice={}", notice.code())))
}
