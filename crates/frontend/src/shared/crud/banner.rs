//! Banner state and the failure → message mapping.

use contracts::domain::common::{CrudMessages, ERROR_FALLBACK, FETCH_TRANSPORT, MUTATION_TRANSPORT};

use super::api::ApiError;

/// One transient message under a form or a list. It stays until the next
/// action replaces it; nothing auto-dismisses.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: String,
    pub error: bool,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }

    pub fn alert_class(&self) -> &'static str {
        if self.error {
            "alert mt-3 alert-danger"
        } else {
            "alert mt-3 alert-success"
        }
    }
}

/// Collection load failure.
pub fn fetch_error(err: &ApiError, messages: &CrudMessages) -> Banner {
    match err {
        ApiError::Transport(_) => Banner::error(FETCH_TRANSPORT),
        ApiError::Application { .. } => Banner::error(messages.fetch_failed),
    }
}

/// Creation failure: an application failure surfaces the server's message.
pub fn create_error(err: &ApiError, messages: &CrudMessages) -> Banner {
    match err {
        ApiError::Transport(_) => Banner::error(messages.create_failed),
        ApiError::Application { message, .. } => Banner::error(format!(
            "Error: {}",
            message.as_deref().unwrap_or(ERROR_FALLBACK)
        )),
    }
}

pub fn update_error(err: &ApiError, messages: &CrudMessages) -> Banner {
    match err {
        ApiError::Transport(_) => Banner::error(MUTATION_TRANSPORT),
        ApiError::Application { .. } => Banner::error(messages.update_failed),
    }
}

pub fn delete_error(err: &ApiError, messages: &CrudMessages) -> Banner {
    match err {
        ApiError::Transport(_) => Banner::error(MUTATION_TRANSPORT),
        ApiError::Application { .. } => Banner::error(messages.delete_failed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_cliente::Cliente;
    use contracts::domain::common::CrudResource;

    fn application(message: Option<&str>) -> ApiError {
        ApiError::Application {
            status: 400,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn create_failure_carries_the_server_message() {
        let banner = create_error(&application(Some("CUI duplicado")), &Cliente::MESSAGES);
        assert_eq!(banner.text, "Error: CUI duplicado");
        assert!(banner.error);
    }

    #[test]
    fn create_failure_without_message_uses_the_fallback() {
        let banner = create_error(&application(None), &Cliente::MESSAGES);
        assert_eq!(banner.text, "Error: Ocurrió un error inesperado");
    }

    #[test]
    fn transport_failures_use_the_fixed_strings() {
        let err = ApiError::Transport("dns".into());
        assert_eq!(
            fetch_error(&err, &Cliente::MESSAGES).text,
            "Error en la comunicación con la API"
        );
        assert_eq!(
            delete_error(&err, &Cliente::MESSAGES).text,
            "Error al comunicarse con la API"
        );
        assert_eq!(
            create_error(&err, &Cliente::MESSAGES).text,
            "Error al crear el cliente"
        );
    }

    #[test]
    fn application_failures_use_the_entity_strings() {
        let err = application(Some("ignored"));
        assert_eq!(
            fetch_error(&err, &Cliente::MESSAGES).text,
            "Error al obtener los clientes"
        );
        assert_eq!(
            delete_error(&err, &Cliente::MESSAGES).text,
            "Error al eliminar el cliente"
        );
    }
}
