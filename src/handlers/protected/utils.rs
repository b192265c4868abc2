use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::middleware::AuthUser;

/// `?userId=N` on the list routes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub user_id: Option<String>,
}

/// Identity attached by the auth middleware, or 401
pub fn require_user(user: Option<Extension<AuthUser>>) -> Result<AuthUser, ApiError> {
    user.map(|Extension(user)| user)
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))
}

/// Unwrap a JSON body. A request without a JSON content type is treated as
/// having no body, so field checks report the missing field instead.
pub fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Null),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(ApiError::payload_too_large(rejection.body_text()))
        }
        Err(rejection) => Err(ApiError::invalid_json(rejection.body_text())),
    }
}

/// Loose `pokemonId` check used by the like routes: any falsy value counts as
/// missing, anything else must be an integer that fits in 32 bits.
pub fn loose_pokemon_id(body: &Value) -> Result<i32, ApiError> {
    let value = body.get("pokemonId").unwrap_or(&Value::Null);

    if !is_truthy(value) {
        return Err(ApiError::validation_error("Missing pokemonId"));
    }

    integral_i32(value).ok_or_else(|| {
        ApiError::validation_error(format!("Invalid pokemonId: expected an integer, got {}", value))
    })
}

/// `:pokemonId` path segment
pub fn parse_pokemon_id_param(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::validation_error(format!("Invalid pokemonId: '{}' is not an integer", raw)))
}

/// Optional `userId` query parameter. Anything that is not a non-zero
/// integer (absent, empty, `0`, `abc`) means "not given".
pub fn parse_user_id_query(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|id| *id != 0)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn integral_i32(value: &Value) -> Option<i32> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return i32::try_from(i).ok();
    }
    // 25.0 is an integer as far as a JSON client is concerned
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_pokemon_ids_count_as_missing() {
        for body in [
            json!({}),
            json!({ "pokemonId": null }),
            json!({ "pokemonId": 0 }),
            json!({ "pokemonId": "" }),
            json!({ "pokemonId": false }),
            Value::Null,
        ] {
            let err = loose_pokemon_id(&body).unwrap_err();
            assert_eq!(err.message(), "Missing pokemonId", "body: {}", body);
        }
    }

    #[test]
    fn integral_pokemon_ids_are_accepted() {
        assert_eq!(loose_pokemon_id(&json!({ "pokemonId": 25 })).unwrap(), 25);
        assert_eq!(loose_pokemon_id(&json!({ "pokemonId": 150.0 })).unwrap(), 150);
        assert_eq!(loose_pokemon_id(&json!({ "pokemonId": -3 })).unwrap(), -3);
    }

    #[test]
    fn truthy_non_integers_are_invalid() {
        for body in [
            json!({ "pokemonId": "pikachu" }),
            json!({ "pokemonId": 1.5 }),
            json!({ "pokemonId": true }),
            json!({ "pokemonId": 4_000_000_000u64 }),
        ] {
            let err = loose_pokemon_id(&body).unwrap_err();
            assert!(err.message().starts_with("Invalid pokemonId"), "body: {}", body);
        }
    }

    #[test]
    fn user_id_query_parsing() {
        assert_eq!(parse_user_id_query(None), None);
        assert_eq!(parse_user_id_query(Some("")), None);
        assert_eq!(parse_user_id_query(Some("5")), Some(5));
        assert_eq!(parse_user_id_query(Some(" 5 ")), Some(5));
        assert_eq!(parse_user_id_query(Some("0")), None);
        assert_eq!(parse_user_id_query(Some("five")), None);
    }

    #[test]
    fn path_param_parsing() {
        assert_eq!(parse_pokemon_id_param("25").unwrap(), 25);
        assert!(parse_pokemon_id_param("abc").is_err());
    }

    #[test]
    fn missing_identity_is_unauthorized() {
        let err = require_user(None).unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Unauthorized");
    }
}
