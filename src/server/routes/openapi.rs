//! OpenAPI specification endpoint

use axum::Json;

/// GET /openapi.json - Get OpenAPI specification
pub async fn openapi_spec() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.1.0",
        "info": {
            "title": "StoryScope API",
            "description": "Estimates user story complexity and Fibonacci story points",
            "version": env!("CARGO_PKG_VERSION")
        },
        "servers": [
            {
                "url": "http://localhost:8001",
                "description": "Local development server"
            }
        ],
        "paths": {
            "/": {
                "get": {
                    "summary": "Service info",
                    "operationId": "serviceInfo",
                    "responses": {
                        "200": { "description": "Service is up" }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Readiness check",
                    "operationId": "healthCheck",
                    "responses": {
                        "200": {
                            "description": "Text analyzer is loaded",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HealthResponse" }
                                }
                            }
                        }
                    }
                }
            },
            "/estimate": {
                "post": {
                    "summary": "Estimate a user story",
                    "operationId": "estimateStory",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Story" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Complexity score and story points",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ScoreResult" }
                                }
                            }
                        },
                        "500": {
                            "description": "Text analysis failed",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Story": {
                    "type": "object",
                    "properties": {
                        "summary": { "type": "string", "default": "" },
                        "description": { "type": "string", "default": "" },
                        "labels": {
                            "type": "array",
                            "items": { "type": "string" },
                            "default": []
                        }
                    },
                    "example": {
                        "summary": "Add user authentication",
                        "description": "Implement OAuth2 based authentication system",
                        "labels": ["security", "authentication"]
                    }
                },
                "ScoreResult": {
                    "type": "object",
                    "required": ["summary", "description", "labels", "complexity_score", "story_points", "analysis"],
                    "properties": {
                        "summary": { "type": "string" },
                        "description": { "type": "string" },
                        "labels": { "type": "array", "items": { "type": "string" } },
                        "complexity_score": { "type": "number", "minimum": 1.0, "maximum": 100.0 },
                        "story_points": { "type": "integer", "enum": [1, 2, 3, 5, 8, 13, 21] },
                        "analysis": { "$ref": "#/components/schemas/Analysis" }
                    }
                },
                "Analysis": {
                    "type": "object",
                    "properties": {
                        "token_count": { "type": "integer", "minimum": 1 },
                        "sentence_count": { "type": "integer", "minimum": 1 },
                        "avg_sentence_len": { "type": "number" },
                        "uncertainty_factor": { "type": "integer" },
                        "technical_factor": { "type": "integer" },
                        "entity_factor": { "type": "integer" },
                        "label_factor": { "type": "integer" },
                        "short_sentence_penalty": { "type": "integer" }
                    }
                },
                "HealthResponse": {
                    "type": "object",
                    "properties": {
                        "status": { "type": "string" },
                        "model": { "type": "string" },
                        "version": { "type": "string" },
                        "uptime_secs": { "type": "integer" }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "error": { "type": "string" },
                        "code": { "type": "string" }
                    }
                }
            }
        }
    }))
}
