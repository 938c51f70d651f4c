//! API description and the two HTML viewers that render it.

use serde_json::{json, Value};

pub const SPEC_PATH: &str = "/swagger.json";

/// Swagger 2.0 document describing the `/animals` routes.
pub fn swagger(host: &str) -> Value {
    let id_param = json!({
        "in": "path",
        "name": "id",
        "description": "Id de um animal",
        "required": true,
        "type": "integer"
    });
    let body_param = json!({
        "in": "body",
        "name": "body",
        "required": true,
        "schema": { "$ref": "#/definitions/AnimalInput" }
    });
    let not_found = json!({
        "description": "Animal não encontrado",
        "schema": { "$ref": "#/definitions/Message" }
    });
    let duplicate = json!({
        "description": "Animal já existe",
        "schema": { "$ref": "#/definitions/Message" }
    });

    json!({
        "swagger": "2.0",
        "info": {
            "title": "Animals",
            "version": "1.0.0",
            "description": "Animais de todos os tipos"
        },
        "host": host,
        "basePath": "/",
        "consumes": ["application/json"],
        "produces": ["application/json"],
        "tags": [{ "name": "animals" }],
        "paths": {
            "/animals": {
                "get": {
                    "summary": "Listagem de Animais",
                    "description": "Retorna uma lista de todos animais",
                    "tags": ["animals"],
                    "responses": {
                        "200": {
                            "description": "Lista de animais",
                            "schema": {
                                "type": "array",
                                "items": { "$ref": "#/definitions/Animal" }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Adiciona um animal",
                    "description": "Adiciona um animal na lista",
                    "tags": ["animals"],
                    "parameters": [body_param.clone()],
                    "responses": {
                        "201": {
                            "description": "Animal adicionado",
                            "schema": { "$ref": "#/definitions/Animal" }
                        },
                        "400": duplicate.clone()
                    }
                }
            },
            "/animals/{id}": {
                "get": {
                    "summary": "Um Animal",
                    "description": "Retorna um animal pelo id",
                    "tags": ["animals"],
                    "parameters": [id_param.clone()],
                    "responses": {
                        "200": {
                            "description": "Um animal",
                            "schema": {
                                "type": "array",
                                "items": { "$ref": "#/definitions/Animal" }
                            }
                        },
                        "404": not_found.clone()
                    }
                },
                "put": {
                    "summary": "Altera um animal",
                    "description": "Altera um animal na lista",
                    "tags": ["animals"],
                    "parameters": [id_param.clone(), body_param],
                    "responses": {
                        "200": {
                            "description": "Animal alterado",
                            "schema": { "$ref": "#/definitions/Message" }
                        },
                        "400": duplicate,
                        "404": not_found.clone()
                    }
                },
                "delete": {
                    "summary": "Remove um animal",
                    "description": "Remove um animal na lista",
                    "tags": ["animals"],
                    "parameters": [id_param],
                    "responses": {
                        "200": {
                            "description": "Animal removido",
                            "schema": { "$ref": "#/definitions/Message" }
                        },
                        "404": not_found
                    }
                }
            }
        },
        "definitions": {
            "Animal": {
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "name": { "type": "string" }
                }
            },
            "AnimalInput": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": { "type": "string" }
                }
            },
            "Message": {
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                }
            }
        }
    })
}

pub const REDOC_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Animals</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>body { margin: 0; padding: 0; }</style>
</head>
<body>
    <redoc spec-url="/swagger.json"></redoc>
    <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

pub const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Animals</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({ url: "/swagger.json", dom_id: "#swagger-ui" });
        };
    </script>
</body>
</html>
"##;
