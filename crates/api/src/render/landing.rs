use super::layout;

/// Role picker linking to the admin and customer pages.
pub fn landing_page() -> String {
    let body = "\
        <main style=\"min-height:90vh;display:flex;flex-direction:column;\
        align-items:center;justify-content:center;text-align:center\">\
        <h1>Product Management System</h1>\
        <p>Choose your role below to proceed.</p>\
        <nav style=\"display:flex;gap:1rem\">\
        <a class=\"badge public\" href=\"/admin\">Admin</a>\
        <a class=\"badge public\" href=\"/customer\">Customer</a>\
        </nav></main>";

    layout("Product Management System", body)
}
