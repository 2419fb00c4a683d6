//! Server-rendered HTML pages.
//!
//! Pages only interpolate numbers, subject codes, and fixed messages, never
//! raw user input.

use sgpa_core::grading::{GradingConfig, MarkResult};
use sgpa_core::subject::Component;
use sgpa_core::upload::PHOTO_FIELD;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

/// The marks entry form, optionally showing a validation error above it.
pub fn marks_form(grading: &GradingConfig, error: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(error) = error {
        body.push_str(&format!("<p class=\"error\">{error}</p>\n"));
    }

    body.push_str("<form method=\"post\" action=\"/\">\n<table>\n");
    body.push_str("<tr><th>Subject</th><th>Theory</th><th>Practical</th></tr>\n");
    for (code, max) in grading.subjects() {
        body.push_str(&format!(
            "<tr><td>{code}</td>\
             <td><input type=\"number\" step=\"any\" min=\"0\" max=\"{tmax}\" name=\"{tname}\"> / {tmax}</td>\
             <td><input type=\"number\" step=\"any\" min=\"0\" max=\"{pmax}\" name=\"{pname}\"> / {pmax}</td></tr>\n",
            tmax = max.theory,
            pmax = max.practical,
            tname = Component::Theory.field_name(code),
            pname = Component::Practical.field_name(code),
        ));
    }
    body.push_str("</table>\n<button type=\"submit\">Calculate</button>\n</form>\n");
    body.push_str("<p><a href=\"/upload\">Upload a marksheet photo</a></p>\n");

    layout("Marks Calculator", &body)
}

/// Percentage and SGPA for a valid submission.
pub fn marks_result(result: &MarkResult) -> String {
    let body = format!(
        "<p>Percentage: <strong>{:.2}%</strong></p>\n\
         <p>SGPA: <strong>{:.2}</strong></p>\n\
         <p><a href=\"/\">Calculate again</a></p>\n",
        result.percentage, result.sgpa,
    );
    layout("Result", &body)
}

/// The photo upload form.
pub fn upload_form() -> String {
    let body = format!(
        "<form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"{PHOTO_FIELD}\" accept=\"image/*\">\n\
         <button type=\"submit\">Upload</button>\n\
         </form>\n"
    );
    layout("Upload Photo", &body)
}

/// Outcome page after a photo was stored.
pub fn upload_result(message: &str) -> String {
    let body = format!(
        "<p>{message}</p>\n\
         <p><a href=\"/upload\">Upload another</a> | <a href=\"/\">Back to calculator</a></p>\n"
    );
    layout("Upload Result", &body)
}
