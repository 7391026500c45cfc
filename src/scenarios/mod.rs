//! The six scenarios, in their fixed chain order
//!
//! Later scenarios depend on DOM state left by earlier ones (the edit
//! scenario edits the row the register scenario created), so the order is
//! part of the contract.

mod delete;
mod login;
mod register;
mod search;
mod update;
mod validation;

use crate::browser::Session;
use crate::common::Result;
use crate::evidence::Evidence;

// Fixed test data; not configurable
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "12345";
pub const STUDENT_NAME: &str = "Estudiante QA";
pub const STUDENT_CODE: &str = "HU-02";
pub const STUDENT_GRADE: &str = "10";
pub const UPDATED_NAME: &str = "Estudiante QA Actualizado";

// Screenshot artifact names, one per captured scenario
pub const EVIDENCE_LOGIN: &str = "HU01_Login_Exitoso";
pub const EVIDENCE_REGISTER: &str = "HU02_Registro_Exitoso";
pub const EVIDENCE_SEARCH: &str = "HU03_Busqueda_Limite";
pub const EVIDENCE_UPDATE: &str = "HU04_Edicion_Completa";
pub const EVIDENCE_DELETE: &str = "HU05_Eliminacion_Exitosa";

/// Identifier of one scenario in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioId {
    Login,
    Register,
    NegativeValidation,
    SearchBoundary,
    Update,
    Delete,
}

impl ScenarioId {
    /// The full chain in execution order
    pub const CHAIN: [ScenarioId; 6] = [
        ScenarioId::Login,
        ScenarioId::Register,
        ScenarioId::NegativeValidation,
        ScenarioId::SearchBoundary,
        ScenarioId::Update,
        ScenarioId::Delete,
    ];

    /// Short machine name, used in reports
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioId::Login => "login",
            ScenarioId::Register => "register",
            ScenarioId::NegativeValidation => "negative_validation",
            ScenarioId::SearchBoundary => "search_boundary",
            ScenarioId::Update => "update",
            ScenarioId::Delete => "delete",
        }
    }

    /// Human label, mirroring the user-story numbering
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioId::Login => "HU-01: Autenticación de administrador",
            ScenarioId::Register => "HU-02: Registrar nuevo estudiante",
            ScenarioId::NegativeValidation => "HU-02: Validación negativa (campos vacíos)",
            ScenarioId::SearchBoundary => "HU-03: Búsqueda y límite de caracteres",
            ScenarioId::Update => "HU-04: Editar información del estudiante",
            ScenarioId::Delete => "HU-05: Eliminar estudiante",
        }
    }

    /// Screenshot artifact name; the negative validation captures none
    pub fn evidence_name(&self) -> Option<&'static str> {
        match self {
            ScenarioId::Login => Some(EVIDENCE_LOGIN),
            ScenarioId::Register => Some(EVIDENCE_REGISTER),
            ScenarioId::NegativeValidation => None,
            ScenarioId::SearchBoundary => Some(EVIDENCE_SEARCH),
            ScenarioId::Update => Some(EVIDENCE_UPDATE),
            ScenarioId::Delete => Some(EVIDENCE_DELETE),
        }
    }

    /// Execute this scenario against the shared session
    pub async fn run(&self, session: &Session, evidence: &Evidence) -> Result<()> {
        match self {
            ScenarioId::Login => login::run(session, evidence).await,
            ScenarioId::Register => register::run(session, evidence).await,
            ScenarioId::NegativeValidation => validation::run(session, evidence).await,
            ScenarioId::SearchBoundary => search::run(session, evidence).await,
            ScenarioId::Update => update::run(session, evidence).await,
            ScenarioId::Delete => delete::run(session, evidence).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_order_is_fixed() {
        let names: Vec<_> = ScenarioId::CHAIN.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "login",
                "register",
                "negative_validation",
                "search_boundary",
                "update",
                "delete"
            ]
        );
    }

    #[test]
    fn only_negative_validation_skips_evidence() {
        for id in ScenarioId::CHAIN {
            assert_eq!(
                id.evidence_name().is_none(),
                id == ScenarioId::NegativeValidation
            );
        }
    }

    #[test]
    fn updated_name_extends_original() {
        // The absence checks in the update scenario rely on this
        assert!(UPDATED_NAME.starts_with(STUDENT_NAME));
        assert_ne!(UPDATED_NAME, STUDENT_NAME);
    }
}
