use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::models::{CreatePizzaRequest, Pizza, PizzaSize, ServiceError};

use super::ApiState;

/// Form payload posted by the catalog page
///
/// Checkbox semantics: the browser only sends `is_gluten_free` when checked.
#[derive(Debug, Deserialize)]
pub struct PizzaForm {
    pub name: String,
    pub size: String,
    #[serde(default)]
    pub is_gluten_free: Option<String>,
    pub price: String,
}

/// Render the pizza catalog page
#[instrument(name = "catalog_page", skip(state))]
pub async fn catalog_page(
    State(state): State<ApiState>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match state.catalog_service.get_pizzas().await {
        Ok(response) => Ok(Html(render_catalog(&response.pizzas))),
        Err(err) => {
            error!("Failed to render catalog page: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error("The pizza catalog is unavailable right now.")),
            ))
        }
    }
}

/// Handle the add-pizza form post and redirect back to the catalog
#[instrument(name = "add_pizza_form", skip(state, form), fields(name = %form.name))]
pub async fn add_pizza_form(
    State(state): State<ApiState>,
    Form(form): Form<PizzaForm>,
) -> Result<Redirect, (StatusCode, Html<String>)> {
    let size = PizzaSize::from_str(&form.size)
        .map_err(|err| (StatusCode::BAD_REQUEST, Html(render_error(&err))))?;

    let price = Decimal::from_str(form.price.trim()).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Html(render_error(&format!("Invalid price: {}", form.price))),
        )
    })?;

    let request = CreatePizzaRequest {
        name: form.name,
        size,
        is_gluten_free: form.is_gluten_free.is_some(),
        price,
    };

    match state.catalog_service.add_pizza(request).await {
        Ok(pizza) => {
            info!("Added pizza {} via catalog page", pizza.id);
            Ok(Redirect::to("/"))
        }
        Err(ServiceError::Validation { message }) => {
            Err((StatusCode::BAD_REQUEST, Html(render_error(&message))))
        }
        Err(err) => {
            error!("Failed to add pizza via catalog page: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error("The pizza could not be saved.")),
            ))
        }
    }
}

/// Handle the delete form post and redirect back to the catalog
///
/// Deleting an id that is already gone is a no-op, matching the catalog's
/// idempotent delete semantics.
#[instrument(name = "delete_pizza_form", skip(state), fields(pizza_id = %pizza_id))]
pub async fn delete_pizza_form(
    State(state): State<ApiState>,
    Path(pizza_id): Path<i64>,
) -> Result<Redirect, (StatusCode, Html<String>)> {
    match state.catalog_service.delete_pizza(pizza_id).await {
        Ok(_) => Ok(Redirect::to("/")),
        Err(err) => {
            error!("Failed to delete pizza via catalog page: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error("The pizza could not be deleted.")),
            ))
        }
    }
}

fn render_catalog(pizzas: &[Pizza]) -> String {
    let mut rows = String::new();
    for pizza in pizzas {
        rows.push_str(&format!(
            concat!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
                "<td><form method=\"post\" action=\"/pizzas/{}/delete\">",
                "<button type=\"submit\">Delete</button></form></td></tr>\n"
            ),
            html_escape(&pizza.name),
            pizza.size,
            if pizza.is_gluten_free { "yes" } else { "no" },
            pizza.price,
            pizza.id,
        ));
    }

    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"5\">No pizzas yet.</td></tr>\n");
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head><title>Pizza Catalog</title></head>\n<body>\n",
            "<h1>Pizza Catalog</h1>\n",
            "<table>\n",
            "<tr><th>Name</th><th>Size</th><th>Gluten free</th><th>Price</th><th></th></tr>\n",
            "{}",
            "</table>\n",
            "<h2>Add a pizza</h2>\n",
            "<form method=\"post\" action=\"/pizzas\">\n",
            "<label>Name <input name=\"name\" required></label>\n",
            "<label>Size <select name=\"size\">",
            "<option value=\"small\">Small</option>",
            "<option value=\"medium\" selected>Medium</option>",
            "<option value=\"large\">Large</option>",
            "</select></label>\n",
            "<label>Gluten free <input type=\"checkbox\" name=\"is_gluten_free\"></label>\n",
            "<label>Price <input name=\"price\" required></label>\n",
            "<button type=\"submit\">Add</button>\n",
            "</form>\n",
            "</body>\n</html>\n"
        ),
        rows
    )
}

fn render_error(message: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head><title>Pizza Catalog</title></head>\n<body>\n",
            "<h1>Something went wrong</h1>\n",
            "<p>{}</p>\n",
            "<p><a href=\"/\">Back to the catalog</a></p>\n",
            "</body>\n</html>\n"
        ),
        html_escape(message)
    )
}

fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("Margherita"), "Margherita");
        assert_eq!(
            html_escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(html_escape("Ham & Cheese"), "Ham &amp; Cheese");
    }

    #[test]
    fn test_render_catalog_empty() {
        let html = render_catalog(&[]);
        assert!(html.contains("No pizzas yet."));
        assert!(html.contains("Add a pizza"));
    }

    #[test]
    fn test_render_catalog_rows() {
        let pizzas = vec![Pizza {
            id: 1,
            name: "Ham & Cheese".to_string(),
            size: PizzaSize::Large,
            is_gluten_free: true,
            price: dec!(11.25),
        }];

        let html = render_catalog(&pizzas);
        assert!(html.contains("Ham &amp; Cheese"));
        assert!(html.contains("large"));
        assert!(html.contains("11.25"));
        assert!(html.contains("/pizzas/1/delete"));
    }

    #[test]
    fn test_render_error_escapes_message() {
        let html = render_error("<b>boom</b>");
        assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
    }
}
