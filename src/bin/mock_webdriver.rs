//! Mock WebDriver binary for integration testing
//!
//! Implements just enough of the W3C WebDriver wire protocol over HTTP to
//! drive the scenario chain without a real browser, backed by an in-memory
//! model of the student CRUD page: login gate, student table, create/edit
//! form modes, search filtering, and the confirm dialog on delete.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};

use clap::Parser;
use serde_json::{json, Value};

/// Backspace code point, as sent in WebDriver key sequences
const KEY_BACKSPACE: char = '\u{e003}';

/// 1x1 transparent PNG, base64
const SCREENSHOT_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

#[derive(Parser)]
#[command(name = "mock-webdriver", about = "In-memory WebDriver for harness tests")]
struct Args {
    /// Port to listen on
    #[arg(long)]
    port: u16,

    /// Login never reveals the dashboard
    #[arg(long)]
    fail_auth: bool,
}

fn main() {
    let args = Args::parse();

    let listener = match TcpListener::bind(("127.0.0.1", args.port)) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("mock-webdriver: cannot bind port {}: {}", args.port, e);
            std::process::exit(1);
        }
    };

    let mut model = PageModel::new(args.fail_auth);

    for stream in listener.incoming() {
        let Ok(stream) = stream else { continue };
        handle_connection(stream, &mut model);
    }
}

/// One request per connection; responses always close the connection
fn handle_connection(stream: TcpStream, model: &mut PageModel) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).unwrap_or(0) == 0 {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        return;
    };
    let method = method.to_string();
    let path = path.to_string();

    // Headers: only content-length matters
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body_bytes = vec![0u8; content_length];
    if content_length > 0 && reader.read_exact(&mut body_bytes).is_err() {
        return;
    }
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    let (status, response) = route(model, &method, &path, &body);
    write_response(reader.into_inner(), status, &response);
}

fn write_response(mut stream: TcpStream, status: u16, body: &Value) {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Internal Server Error",
    };
    let payload = body.to_string();
    let head = format!(
        "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json; charset=utf-8\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
        payload.len()
    );
    stream.write_all(head.as_bytes()).ok();
    stream.write_all(payload.as_bytes()).ok();
    stream.flush().ok();
}

/// Dispatch one request against the page model
fn route(model: &mut PageModel, method: &str, path: &str, body: &Value) -> (u16, Value) {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", ["status"]) => (
            200,
            json!({ "value": { "ready": true, "message": "mock-webdriver ready" } }),
        ),

        ("POST", ["session"]) => (
            200,
            json!({ "value": { "sessionId": "mock-session", "capabilities": {} } }),
        ),
        ("DELETE", ["session", _]) => (200, json!({ "value": null })),
        ("POST", [_, _, "timeouts"]) => (200, json!({ "value": null })),

        ("POST", [_, _, "url"]) => {
            model.load();
            (200, json!({ "value": null }))
        }

        ("POST", [_, _, "element"]) => {
            let using = body["using"].as_str().unwrap_or("");
            let value = body["value"].as_str().unwrap_or("");
            match model.find_element(using, value) {
                Some(handle) => (
                    200,
                    json!({ "value": { "element-6066-11e4-a52e-4f735466cecf": handle } }),
                ),
                None => error_response("no such element", &format!("no element for {using} {value}")),
            }
        }

        ("POST", [_, _, "element", handle, "click"]) => {
            let handle = handle.to_string();
            if !model.element_exists(&handle) {
                return stale_element(&handle);
            }
            model.click(&handle);
            (200, json!({ "value": null }))
        }
        ("POST", [_, _, "element", handle, "clear"]) => {
            let handle = handle.to_string();
            if !model.element_exists(&handle) {
                return stale_element(&handle);
            }
            model.clear(&handle);
            (200, json!({ "value": null }))
        }
        ("POST", [_, _, "element", handle, "value"]) => {
            let handle = handle.to_string();
            if !model.element_exists(&handle) {
                return stale_element(&handle);
            }
            let text = body["text"].as_str().unwrap_or("");
            model.send_keys(&handle, text);
            (200, json!({ "value": null }))
        }
        ("GET", [_, _, "element", handle, "text"]) => {
            if !model.element_exists(handle) {
                return stale_element(handle);
            }
            (200, json!({ "value": model.text(handle) }))
        }
        ("GET", [_, _, "element", handle, "displayed"]) => {
            if !model.element_exists(handle) {
                return stale_element(handle);
            }
            (200, json!({ "value": model.displayed(handle) }))
        }
        ("GET", [_, _, "element", handle, "enabled"]) => {
            if !model.element_exists(handle) {
                return stale_element(handle);
            }
            (200, json!({ "value": true }))
        }

        ("GET", [_, _, "screenshot"]) => (200, json!({ "value": SCREENSHOT_B64 })),

        ("GET", [_, _, "alert", "text"]) => match model.alert_text() {
            Some(text) => (200, json!({ "value": text })),
            None => error_response("no such alert", "no dialog is open"),
        },
        ("POST", [_, _, "alert", "accept"]) => {
            if model.accept_alert() {
                (200, json!({ "value": null }))
            } else {
                error_response("no such alert", "no dialog is open")
            }
        }
        ("POST", [_, _, "alert", "dismiss"]) => {
            if model.dismiss_alert() {
                (200, json!({ "value": null }))
            } else {
                error_response("no such alert", "no dialog is open")
            }
        }

        _ => error_response("unknown command", &format!("{method} {path}")),
    }
}

fn error_response(error: &str, message: &str) -> (u16, Value) {
    (
        404,
        json!({ "value": { "error": error, "message": message, "stacktrace": "" } }),
    )
}

fn stale_element(handle: &str) -> (u16, Value) {
    error_response("stale element reference", &format!("element {handle} is gone"))
}

// === Page model ===

#[derive(Debug, Clone)]
struct Student {
    serial: usize,
    name: String,
    code: String,
    grade: String,
}

/// In-memory rendition of the CRUD page
struct PageModel {
    fail_auth: bool,
    loaded: bool,
    logged_in: bool,
    username: String,
    password: String,
    form_name: String,
    form_code: String,
    form_grade: String,
    search: String,
    students: Vec<Student>,
    next_serial: usize,
    editing: Option<usize>,
    success_visible: bool,
    error_visible: bool,
    pending_delete: Option<usize>,
}

impl PageModel {
    fn new(fail_auth: bool) -> Self {
        Self {
            fail_auth,
            loaded: false,
            logged_in: false,
            username: String::new(),
            password: String::new(),
            form_name: String::new(),
            form_code: String::new(),
            form_grade: String::new(),
            search: String::new(),
            students: Vec::new(),
            next_serial: 1,
            editing: None,
            success_visible: false,
            error_visible: false,
            pending_delete: None,
        }
    }

    /// Fresh page load resets everything
    fn load(&mut self) {
        let fail_auth = self.fail_auth;
        *self = Self::new(fail_auth);
        self.loaded = true;
    }

    fn students_matching_search(&self) -> Vec<&Student> {
        let query = self.search.to_lowercase();
        self.students
            .iter()
            .filter(|s| {
                query.is_empty()
                    || s.name.to_lowercase().contains(&query)
                    || s.code.to_lowercase().contains(&query)
            })
            .collect()
    }

    fn no_records_shown(&self) -> bool {
        self.logged_in && self.students_matching_search().is_empty()
    }

    // --- element resolution ---

    const IDS: [&'static str; 14] = [
        "username",
        "password",
        "btn-login",
        "dashboard-section",
        "student-name",
        "student-code",
        "student-grade",
        "btn-save",
        "success-msg",
        "form-error",
        "student-table-body",
        "search-input",
        "no-records",
        "form-title",
    ];

    fn find_element(&self, using: &str, value: &str) -> Option<String> {
        if !self.loaded {
            return None;
        }
        match using {
            "css selector" => {
                let id = css_selector_id(value)?;
                Self::IDS.contains(&id.as_str()).then_some(id)
            }
            "xpath" => self.find_by_xpath(value),
            _ => None,
        }
    }

    fn find_by_xpath(&self, xpath: &str) -> Option<String> {
        if let Some(value) = parse_option_xpath(xpath) {
            return Some(format!("option-{value}"));
        }
        if let Some((fragment, class)) = parse_row_button_xpath(xpath) {
            let student = self
                .students_matching_search()
                .into_iter()
                .find(|s| s.name.contains(&fragment))?;
            return Some(format!("{class}-{}", student.serial));
        }
        None
    }

    fn element_exists(&self, handle: &str) -> bool {
        if !self.loaded {
            return false;
        }
        if Self::IDS.contains(&handle) {
            return true;
        }
        if handle.starts_with("option-") {
            return true;
        }
        if let Some(serial) = row_button_serial(handle) {
            return self.students.iter().any(|s| s.serial == serial);
        }
        false
    }

    // --- interactions ---

    fn click(&mut self, handle: &str) {
        match handle {
            "btn-login" => {
                if !self.fail_auth && self.username == "admin" && self.password == "12345" {
                    self.logged_in = true;
                }
            }
            "btn-save" => self.save(),
            _ => {
                if let Some(value) = handle.strip_prefix("option-") {
                    self.form_grade = value.to_string();
                } else if let Some(serial) = handle.strip_prefix("edit-btn-") {
                    self.start_edit(serial.parse().unwrap_or(0));
                } else if let Some(serial) = handle.strip_prefix("delete-btn-") {
                    self.pending_delete = serial.parse().ok();
                }
            }
        }
    }

    fn save(&mut self) {
        if self.form_name.is_empty() || self.form_code.is_empty() || self.form_grade.is_empty() {
            self.error_visible = true;
            self.success_visible = false;
            return;
        }

        match self.editing.take() {
            Some(serial) => {
                if let Some(student) = self.students.iter_mut().find(|s| s.serial == serial) {
                    student.name = self.form_name.clone();
                    student.code = self.form_code.clone();
                    student.grade = self.form_grade.clone();
                }
            }
            None => {
                self.students.push(Student {
                    serial: self.next_serial,
                    name: self.form_name.clone(),
                    code: self.form_code.clone(),
                    grade: self.form_grade.clone(),
                });
                self.next_serial += 1;
            }
        }

        self.form_name.clear();
        self.form_code.clear();
        self.form_grade.clear();
        self.success_visible = true;
        self.error_visible = false;
    }

    fn start_edit(&mut self, serial: usize) {
        if let Some(student) = self.students.iter().find(|s| s.serial == serial) {
            self.form_name = student.name.clone();
            self.form_code = student.code.clone();
            self.form_grade = student.grade.clone();
            self.editing = Some(serial);
        }
    }

    fn field_mut(&mut self, handle: &str) -> Option<&mut String> {
        match handle {
            "username" => Some(&mut self.username),
            "password" => Some(&mut self.password),
            "student-name" => Some(&mut self.form_name),
            "student-code" => Some(&mut self.form_code),
            "search-input" => Some(&mut self.search),
            _ => None,
        }
    }

    fn send_keys(&mut self, handle: &str, text: &str) {
        if let Some(field) = self.field_mut(handle) {
            for c in text.chars() {
                if c == KEY_BACKSPACE {
                    field.pop();
                } else {
                    field.push(c);
                }
            }
        }
    }

    fn clear(&mut self, handle: &str) {
        if let Some(field) = self.field_mut(handle) {
            field.clear();
        }
    }

    fn text(&self, handle: &str) -> String {
        match handle {
            "form-title" => {
                if self.editing.is_some() {
                    "Editar Estudiante".to_string()
                } else {
                    "Registrar Estudiante".to_string()
                }
            }
            "btn-save" => {
                if self.editing.is_some() {
                    "Actualizar Datos".to_string()
                } else {
                    "Guardar Estudiante".to_string()
                }
            }
            "student-table-body" => self
                .students_matching_search()
                .iter()
                .map(|s| format!("{} {} {}", s.name, s.code, s.grade))
                .collect::<Vec<_>>()
                .join("\n"),
            "success-msg" => "Estudiante guardado correctamente".to_string(),
            "form-error" => "Todos los campos son obligatorios".to_string(),
            "no-records" => "No se encontraron registros".to_string(),
            "dashboard-section" => "Panel de Administración".to_string(),
            _ => String::new(),
        }
    }

    fn displayed(&self, handle: &str) -> bool {
        match handle {
            "username" | "password" | "btn-login" => !self.logged_in,
            "dashboard-section" => self.logged_in,
            "student-name" | "student-code" | "student-grade" | "btn-save" | "form-title"
            | "student-table-body" | "search-input" => self.logged_in,
            "success-msg" => self.success_visible,
            "form-error" => self.error_visible,
            "no-records" => self.no_records_shown(),
            _ => {
                if handle.starts_with("option-") {
                    self.logged_in
                } else if let Some(serial) = row_button_serial(handle) {
                    self.students_matching_search()
                        .iter()
                        .any(|s| s.serial == serial)
                } else {
                    false
                }
            }
        }
    }

    // --- confirm dialog ---

    fn alert_text(&self) -> Option<String> {
        self.pending_delete
            .map(|_| "¿Eliminar este estudiante?".to_string())
    }

    fn accept_alert(&mut self) -> bool {
        match self.pending_delete.take() {
            Some(serial) => {
                self.students.retain(|s| s.serial != serial);
                true
            }
            None => false,
        }
    }

    fn dismiss_alert(&mut self) -> bool {
        self.pending_delete.take().is_some()
    }
}

// === Selector parsing ===

/// Accepts `#id`, `[id="id"]` and `[id='id']` selector forms
fn css_selector_id(selector: &str) -> Option<String> {
    if let Some(id) = selector.strip_prefix('#') {
        return Some(id.to_string());
    }
    let inner = selector.strip_prefix("[id=")?.strip_suffix(']')?;
    let id = inner
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| inner.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))?;
    Some(id.to_string())
}

/// `//option[@value='10']` -> `10`
fn parse_option_xpath(xpath: &str) -> Option<String> {
    let rest = xpath.strip_prefix("//option[@value='")?;
    let end = rest.find('\'')?;
    Some(rest[..end].to_string())
}

/// `//td[contains(text(), 'NAME')]/..//button[contains(@class, 'CLASS')]`
/// -> `(NAME, CLASS)` where CLASS is `edit-btn` or `delete-btn`
fn parse_row_button_xpath(xpath: &str) -> Option<(String, String)> {
    let rest = xpath.strip_prefix("//td[contains(text(), '")?;
    let end = rest.find('\'')?;
    let name = rest[..end].to_string();

    let class = if xpath.contains("contains(@class, 'edit-btn')") {
        "edit-btn"
    } else if xpath.contains("contains(@class, 'delete-btn')") {
        "delete-btn"
    } else {
        return None;
    };
    Some((name, class.to_string()))
}

fn row_button_serial(handle: &str) -> Option<usize> {
    handle
        .strip_prefix("edit-btn-")
        .or_else(|| handle.strip_prefix("delete-btn-"))
        .and_then(|s| s.parse().ok())
}
