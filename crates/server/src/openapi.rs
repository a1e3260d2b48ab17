use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub message: String }

/// `id` is ignored on create and required on update.
#[derive(ToSchema)]
pub struct CategoryDoc {
    pub id: Option<i64>,
    pub title: String,
}

/// `category` is the owning category's title; `date` is set by the server.
#[derive(ToSchema)]
pub struct NewsDoc {
    pub id: Option<i64>,
    pub title: String,
    pub text: String,
    #[schema(example = "2026-10-16T09:30:15Z")]
    pub date: Option<String>,
    pub category: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::create,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::news::list,
        crate::routes::news::get,
        crate::routes::news::by_category,
        crate::routes::news::create,
        crate::routes::news::update,
        crate::routes::news::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CategoryDoc,
            NewsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "news")
    )
)]
pub struct ApiDoc;
