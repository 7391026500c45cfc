//! Element contract of the student CRUD page
//!
//! Every locator the scenarios use is built here, so a change to the page
//! lands in one file. The page is a black box otherwise.

use std::path::Path;

use url::Url;

use crate::common::{Error, Result};

// Login
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const LOGIN_BUTTON: &str = "btn-login";
pub const DASHBOARD: &str = "dashboard-section";

// Student form
pub const STUDENT_NAME: &str = "student-name";
pub const STUDENT_CODE: &str = "student-code";
pub const STUDENT_GRADE: &str = "student-grade";
pub const SAVE_BUTTON: &str = "btn-save";
pub const FORM_TITLE: &str = "form-title";
pub const FORM_ERROR: &str = "form-error";
pub const SUCCESS_MESSAGE: &str = "success-msg";

// Table and search
pub const TABLE_BODY: &str = "student-table-body";
pub const SEARCH_INPUT: &str = "search-input";
pub const NO_RECORDS: &str = "no-records";

// Labels the form shows in edit mode
pub const EDIT_FORM_TITLE: &str = "Editar Estudiante";
pub const EDIT_SAVE_LABEL: &str = "Actualizar Datos";

/// XPath for a grade option by its value attribute
pub fn grade_option_xpath(value: &str) -> String {
    format!("//option[@value='{value}']")
}

/// XPath for the edit button in the row whose cell text contains `name`
pub fn row_edit_xpath(name: &str) -> String {
    row_button_xpath(name, "edit-btn")
}

/// XPath for the delete button in the row whose cell text contains `name`
pub fn row_delete_xpath(name: &str) -> String {
    row_button_xpath(name, "delete-btn")
}

fn row_button_xpath(name: &str, class: &str) -> String {
    format!("//td[contains(text(), '{name}')]/..//button[contains(@class, '{class}')]")
}

/// file:// URL for the page under test. The path must be absolute.
pub fn file_url(page: &Path) -> Result<Url> {
    Url::from_file_path(page).map_err(|_| Error::InvalidPagePath(page.display().to_string()))
}
