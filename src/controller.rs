use crate::app_state::AppState;
use crate::customers::find_customer;
use crate::invoices::example_invoice_links;
use crate::models::{Customer, Invoice, Message};
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::{info, warn};
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    UnexpectedError(#[from] eyre::Error),
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RouteError::NotFound(_) => StatusCode::NOT_FOUND,
            RouteError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}

/// Body shape failures (bad JSON, missing or mistyped fields) become 422s.
/// Size limit errors keep their own 413. Bodies without a content type are
/// read as JSON.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            warn!("Rejected request body: {err}");
            match err {
                JsonPayloadError::Deserialize(_) | JsonPayloadError::ContentType => {
                    RouteError::Validation(err.to_string()).into()
                }
                err => err.into(),
            }
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/").route(web::get().to(root)))
        .service(web::resource("/customer").route(web::post().to(create_customer)))
        .service(web::resource("/customer/{customer_id}").route(web::get().to(read_customer)))
        .service(
            web::resource("/customer/{customer_id}/invoice")
                .route(web::post().to(create_invoice))
                .route(web::get().to(list_customer_invoices)),
        )
        .service(web::resource("/invoice/{invoice_no}").route(web::get().to(read_invoice)))
        .service(
            web::resource("/invoice/{invoice_no}/{stockcode}")
                .route(web::get().to(read_line_item))
                .route(web::post().to(add_line_item)),
        );
}

pub async fn root() -> impl Responder {
    web::Json(Message::hello())
}

pub async fn create_customer(data: web::Json<Customer>) -> impl Responder {
    let customer = data.into_inner();
    info!("Customer {} created", customer.customer_id);
    HttpResponse::Created().json(customer)
}

pub async fn read_customer(path: web::Path<(String,)>) -> Result<impl Responder, RouteError> {
    let customer_id = path.into_inner().0;
    match find_customer(&customer_id) {
        Some(customer) => Ok(web::Json(customer)),
        None => {
            warn!("Customer {customer_id} not found");
            Err(RouteError::NotFound(format!("Customer {customer_id} not found")))
        }
    }
}

pub async fn create_invoice(
    path: web::Path<(String,)>,
    data: web::Json<Invoice>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, RouteError> {
    let stored = ctx
        .invoice_table
        .lock()
        .await
        .create_invoice(&path.into_inner().0, data.into_inner())?;
    Ok(web::Json(stored))
}

// Not backed by the invoice table yet.
pub async fn list_customer_invoices(_path: web::Path<(String,)>) -> impl Responder {
    web::Json(example_invoice_links())
}

pub async fn read_invoice(
    path: web::Path<(String,)>,
    ctx: web::Data<AppState>,
) -> Result<impl Responder, RouteError> {
    let invoice_no = path.into_inner().0;
    let invoice = ctx.invoice_table.lock().await.get_invoice(&invoice_no);
    match invoice {
        Some(invoice) => Ok(web::Json(invoice)),
        None => {
            warn!("Invoice {invoice_no} not found");
            Err(RouteError::NotFound(format!("Invoice {invoice_no} not found")))
        }
    }
}

pub async fn read_line_item(_path: web::Path<(String, String)>) -> impl Responder {
    web::Json(Message::hello())
}

pub async fn add_line_item(_path: web::Path<(String, String)>) -> impl Responder {
    web::Json(Message::hello())
}
