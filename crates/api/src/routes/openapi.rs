//! OpenAPI description of the HTTP surface, served only when
//! `SERVE_OPENAPI` is enabled (local development).

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Path the document is served at.
pub const OPENAPI_PATH: &str = "/openapi/v1.json";

/// GET /openapi/v1.json
async fn openapi_document() -> Json<Value> {
    Json(document())
}

/// Build the OpenAPI 3.1 document for the `/api/v1` routes and `/health`.
pub fn document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "PCRE prognostics API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths(),
        "components": { "schemas": schemas() },
    })
}

fn paths() -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int32" }
    });
    let limit_param = json!({
        "name": "limit",
        "in": "query",
        "required": false,
        "schema": { "type": "integer", "minimum": 1, "default": 100 }
    });
    let threshold_param = json!({
        "name": "threshold",
        "in": "query",
        "required": false,
        "schema": { "type": "number", "default": 4.0 }
    });

    let health = json!({
        "summary": "Service and telemetry store health",
        "responses": { "200": ok_json("#/components/schemas/Health") }
    });
    let history = json!({
        "summary": "Earliest readings for a capacitor",
        "parameters": [id_param, limit_param],
        "responses": {
            "200": ok_array("#/components/schemas/Reading"),
            "400": error_ref(),
            "404": error_ref(),
            "500": error_ref()
        }
    });
    let alerts = json!({
        "summary": "Readings whose average output voltage is below the threshold",
        "parameters": [id_param, threshold_param],
        "responses": {
            "200": ok_array("#/components/schemas/Reading"),
            "400": error_ref(),
            "500": error_ref()
        }
    });
    let status = json!({
        "summary": "Health snapshot of the latest reading",
        "parameters": [id_param],
        "responses": {
            "200": ok_json("#/components/schemas/StatusSnapshot"),
            "400": error_ref(),
            "404": error_ref(),
            "500": error_ref()
        }
    });

    json!({
        "/health": { "get": health },
        "/api/v1/capacitors/{id}": { "get": history },
        "/api/v1/capacitors/{id}/alerts": { "get": alerts },
        "/api/v1/capacitors/{id}/status": { "get": status },
    })
}

fn schemas() -> Value {
    let tier = json!({ "$ref": "#/components/schemas/StatusTier" });
    let nullable_string = json!({ "type": ["string", "null"] });

    let reading = json!({
        "type": "object",
        "required": [
            "readingId", "serialDate", "vLoad", "vOut",
            "humanDate", "avgVoltage", "healthIndex", "status"
        ],
        "properties": {
            "readingId": { "type": "integer", "format": "int64" },
            "serialDate": { "type": "number" },
            "vLoad": nullable_string,
            "vOut": nullable_string,
            "humanDate": nullable_string,
            "avgVoltage": { "type": "number" },
            "healthIndex": { "type": "number" },
            "status": tier
        }
    });
    let snapshot = json!({
        "type": "object",
        "required": ["readingId", "humanDate", "avgVoltage", "healthIndex", "status"],
        "properties": {
            "readingId": { "type": "integer", "format": "int64" },
            "humanDate": nullable_string,
            "avgVoltage": { "type": "number" },
            "healthIndex": { "type": "number" },
            "status": tier
        }
    });
    let health = json!({
        "type": "object",
        "required": ["status", "version", "db_healthy"],
        "properties": {
            "status": { "type": "string", "enum": ["ok", "degraded"] },
            "version": { "type": "string" },
            "db_healthy": { "type": "boolean" }
        }
    });
    let error = json!({
        "type": "object",
        "required": ["error", "code"],
        "properties": {
            "error": { "type": "string" },
            "code": { "type": "string" },
            "message": { "type": "string" }
        }
    });

    json!({
        "StatusTier": { "type": "string", "enum": ["Nominal", "Degraded", "Critical"] },
        "Reading": reading,
        "StatusSnapshot": snapshot,
        "Health": health,
        "Error": error,
    })
}

fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn ok_json(schema: &str) -> Value {
    json_response("OK", json!({ "$ref": schema }))
}

fn ok_array(item_schema: &str) -> Value {
    json_response("OK", json!({ "type": "array", "items": { "$ref": item_schema } }))
}

fn error_ref() -> Value {
    json_response("Error", json!({ "$ref": "#/components/schemas/Error" }))
}

/// Mount the document route (root level).
pub fn router() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(openapi_document))
}
