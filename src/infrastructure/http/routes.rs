//! HTTP Routes
//!
//! API Endpoints:
//! - /user                       GET     问候语
//! - /people                     GET     人物列表
//! - /people/{id}                GET     人物详情
//! - /planets                    GET     星球列表
//! - /planets/{id}               GET     星球详情
//! - /users                      GET     用户列表
//! - /users/favorites            GET     用户列表（历史行为）
//! - /favorites                  GET     当前用户的收藏
//! - /favorite/planet/{id}       POST    收藏星球
//! - /favorite/planet/{id}       DELETE  取消收藏星球
//! - /favorite/people/{id}       POST    收藏人物
//! - /favorite/people/{id}       DELETE  取消收藏人物

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user", get(handlers::hello_user))
        .route("/people", get(handlers::list_people))
        .route("/people/:people_id", get(handlers::get_person))
        .route("/planets", get(handlers::list_planets))
        .route("/planets/:planet_id", get(handlers::get_planet))
        .route("/users", get(handlers::list_users))
        .route("/users/favorites", get(handlers::list_favorite_users))
        .route("/favorites", get(handlers::list_favorites))
        .nest("/favorite", favorite_routes())
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
}

/// Favorite 路由
fn favorite_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/planet/:planet_id",
            post(handlers::add_favorite_planet).delete(handlers::remove_favorite_planet),
        )
        .route(
            "/people/:people_id",
            post(handlers::add_favorite_person).delete(handlers::remove_favorite_person),
        )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;
    use tower_http::normalize_path::NormalizePath;

    use crate::application::ports::{
        FavoriteRepositoryPort, NewUser, PersonRepositoryPort, PlanetRepositoryPort,
        UserRepositoryPort,
    };
    use crate::domain::UserId;
    use crate::infrastructure::http::{build_app, AppState};
    use crate::infrastructure::persistence::sqlite::{
        test_pool, DbPool, SqliteFavoriteRepository, SqlitePersonRepository,
        SqlitePlanetRepository, SqliteUserRepository,
    };

    type App = NormalizePath<Router>;

    async fn test_app() -> (App, DbPool) {
        let pool = test_pool().await;
        let state = AppState::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqlitePersonRepository::new(pool.clone())),
            Arc::new(SqlitePlanetRepository::new(pool.clone())),
            Arc::new(SqliteFavoriteRepository::new(pool.clone())),
            UserId::new(1),
        );
        (build_app(Arc::new(state)), pool)
    }

    async fn seed_user(pool: &DbPool, email: &str) -> UserId {
        SqliteUserRepository::new(pool.clone())
            .insert(&NewUser {
                email: email.to_string(),
                password: "use-the-force".to_string(),
                is_active: true,
            })
            .await
            .unwrap()
            .id
    }

    async fn send(app: &App, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    #[tokio::test]
    async fn test_empty_database_lists() {
        let (app, _pool) = test_app().await;

        for uri in ["/people", "/planets", "/users"] {
            let (status, body) = send(&app, "GET", uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, json!([]), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_greeting() {
        let (app, _pool) = test_app().await;

        let (status, body) = send(&app, "GET", "/user").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "msg": "Hello, this is your GET /user response " })
        );
    }

    #[tokio::test]
    async fn test_get_person_and_planet() {
        let (app, pool) = test_app().await;
        let people = SqlitePersonRepository::new(pool.clone());
        let luke = people.insert("Luke Skywalker").await.unwrap();
        let leia = people.insert("Leia Organa").await.unwrap();
        let naboo = SqlitePlanetRepository::new(pool.clone())
            .insert("Naboo")
            .await
            .unwrap();

        for person in [&luke, &leia] {
            let (status, body) = send(&app, "GET", &format!("/people/{}", person.id)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "id": person.id, "name": person.name }));
        }

        let (status, body) = send(&app, "GET", &format!("/planets/{}", naboo.id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": naboo.id, "name": "Naboo" }));

        let (status, body) = send(&app, "GET", "/people").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_rows_are_404() {
        let (app, _pool) = test_app().await;

        let (status, body) = send(&app, "GET", "/people/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Person not found: 42");
        assert_eq!(body["status_code"], 404);

        let (status, _) = send(&app, "GET", "/planets/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_integer_id_is_404() {
        let (app, _pool) = test_app().await;

        for uri in [
            "/people/obi-wan",
            "/planets/99999999999999999999",
            "/favorite/planet/tatooine",
        ] {
            let method = if uri.starts_with("/favorite") { "POST" } else { "GET" };
            let (status, body) = send(&app, method, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body["status_code"], 404, "{}", uri);
            assert!(body["message"].is_string());
        }
    }

    #[tokio::test]
    async fn test_wrong_method_is_json_405() {
        let (app, _pool) = test_app().await;

        for (method, uri) in [
            ("POST", "/people"),
            ("DELETE", "/planets/1"),
            ("GET", "/favorite/people/1"),
        ] {
            let (status, body) = send(&app, method, uri).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
            assert_eq!(body["status_code"], 405);
            assert_eq!(body["message"], "Method not allowed");
        }
    }

    #[tokio::test]
    async fn test_users_never_expose_password() {
        let (app, pool) = test_app().await;
        seed_user(&pool, "luke@rebels.org").await;
        seed_user(&pool, "leia@rebels.org").await;

        for uri in ["/users", "/users/favorites"] {
            let (status, body) = send(&app, "GET", uri).await;
            assert_eq!(status, StatusCode::OK);

            let users = body.as_array().unwrap();
            assert_eq!(users.len(), 2);
            for user in users {
                let fields = user.as_object().unwrap();
                assert!(!fields.contains_key("password"));
                assert!(!fields.contains_key("is_active"));
                assert!(fields.contains_key("email"));
            }
        }
    }

    #[tokio::test]
    async fn test_planet_favorite_lifecycle() {
        let (app, pool) = test_app().await;
        let user_id = seed_user(&pool, "han@falcon.space").await;
        let planet = SqlitePlanetRepository::new(pool.clone())
            .insert("Bespin")
            .await
            .unwrap();
        let favorites = SqliteFavoriteRepository::new(pool.clone());
        let uri = format!("/favorite/planet/{}", planet.id);

        let (status, body) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"], 1);

        let rows = favorites.find_by_user(user_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].planet_id, Some(planet.id));
        assert_eq!(rows[0].people_id, None);
        assert_eq!(rows[0].user_id, UserId::new(1));

        let (status, body) = send(&app, "DELETE", &uri).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
        assert!(favorites.find_by_user(user_id).await.unwrap().is_empty());

        // 重复删除：没有匹配行
        let (status, body) = send(&app, "DELETE", &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn test_person_favorite_listed_for_acting_user() {
        let (app, pool) = test_app().await;
        seed_user(&pool, "rey@jakku.net").await;
        let bb8 = SqlitePersonRepository::new(pool.clone())
            .insert("BB-8")
            .await
            .unwrap();

        let (status, created) = send(&app, "POST", &format!("/favorite/people/{}", bb8.id)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "GET", "/favorites").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": created["id"], "user": 1 }]));

        let (status, _) = send(&app, "DELETE", &format!("/favorite/people/{}", bb8.id)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_duplicate_favorites_delete_lowest_id_first() {
        let (app, pool) = test_app().await;
        seed_user(&pool, "chewie@kashyyyk.org").await;
        let hoth = SqlitePlanetRepository::new(pool.clone())
            .insert("Hoth")
            .await
            .unwrap();
        let uri = format!("/favorite/planet/{}", hoth.id);

        let (status, first) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, second) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(first["id"].as_i64().unwrap() < second["id"].as_i64().unwrap());

        let (status, _) = send(&app, "DELETE", &uri).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, "GET", "/favorites").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": second["id"], "user": 1 }]));
    }

    #[tokio::test]
    async fn test_person_favorite_delete_twice_is_404() {
        let (app, pool) = test_app().await;
        seed_user(&pool, "finn@resistance.org").await;
        let poe = SqlitePersonRepository::new(pool.clone())
            .insert("Poe Dameron")
            .await
            .unwrap();
        let uri = format!("/favorite/people/{}", poe.id);

        let (status, _) = send(&app, "POST", &uri).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(&app, "DELETE", &uri).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, "DELETE", &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status_code"], 404);
    }

    #[tokio::test]
    async fn test_favorite_of_unknown_person_is_rejected() {
        let (app, pool) = test_app().await;
        seed_user(&pool, "wedge@rogue.squadron").await;

        let (status, body) = send(&app, "POST", "/favorite/people/404").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], 400);
    }

    #[tokio::test]
    async fn test_favorite_of_unknown_planet_is_rejected() {
        let (app, pool) = test_app().await;
        seed_user(&pool, "lando@cloud.city").await;

        let (status, body) = send(&app, "POST", "/favorite/planet/777").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], 400);
    }

    #[tokio::test]
    async fn test_trailing_slash_and_unknown_route() {
        let (app, _pool) = test_app().await;

        let (status, body) = send(&app, "GET", "/planets/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = send(&app, "GET", "/starships").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Resource not found");
    }
}
