use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <title>College Campus API</title>
    <style>
        body { font-family: Arial, sans-serif; background: #f7fafc; margin: 0; }
        .container { max-width: 700px; margin: 5rem auto; background: #fff; border-radius: 12px; box-shadow: 0 2px 16px #d0e6fb; padding: 2rem; }
        h1 { color: #2557a7; }
        .btn { display: inline-block; margin: 0.5rem 1rem 0.5rem 0; padding: 0.6rem 1.3rem; background: #2557a7; color: #fff; border-radius: 4px; text-decoration: none; font-weight: bold; }
        .btn:hover { background: #003366; }
    </style>
</head>
<body>
    <div class="container">
        <h1>College Campus API</h1>
        <p>Browse, search and analyze college courses and faculty.</p>
        <div class="links">
            <a class="btn" href="/swagger-ui">Swagger UI Docs</a>
            <a class="btn" href="/api-docs/openapi.json">OpenAPI JSON</a>
        </div>
    </div>
</body>
</html>
"#;

/// Landing page linking to the API documentation
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String)
    ),
    tag = "Root"
)]
pub async fn root() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
