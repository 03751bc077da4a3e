use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::public_rooms::list,
        crate::routes::public_rooms::get,
        crate::routes::rooms::list,
        crate::routes::rooms::get,
        crate::routes::rooms::create,
        crate::routes::rooms::update,
        crate::routes::rooms::delete,
        crate::routes::rooms::gallery_get,
        crate::routes::rooms::gallery_replace,
        crate::routes::rooms::gallery_add,
        crate::routes::rooms::gallery_remove,
        crate::routes::slider::public_list,
        crate::routes::slider::admin_get,
        crate::routes::slider::create,
        crate::routes::slider::update,
        crate::routes::slider::delete,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::services::gallery_list,
        crate::routes::services::gallery_add,
        crate::routes::services::gallery_remove,
        crate::routes::services::gallery_replace,
        crate::routes::room_types::list,
        crate::routes::room_types::get,
        crate::routes::room_types::create,
        crate::routes::room_types::update,
        crate::routes::room_types::delete,
        crate::routes::upload::room_image,
        crate::routes::upload::slider_media,
        crate::routes::import::import_rooms,
    ),
    components(schemas(HealthResponse, LoginRequest)),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "public"),
        (name = "rooms"),
        (name = "slider"),
        (name = "services"),
        (name = "room-types"),
        (name = "upload")
    )
)]
pub struct ApiDoc;
