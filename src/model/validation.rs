use thiserror::Error;

/// Rejections produced by the shared form validation.
///
/// The display text is what the user sees, either in a toast before the request is sent or
/// in the body of the server's 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Preencha todos os campos obrigatórios.")]
    MissingRequiredFields,

    #[error("Data inválida!")]
    InvalidVerificationDate,

    #[error("Descreva o tipo de avaria e a medida corretiva.")]
    MissingDamageDetails,

    #[error("Preencha o formulário antes de enviar.")]
    EmptyChecklist,

    #[error("Escreva um comentário antes de enviar.")]
    EmptyAuditorComment,

    #[error("Pergunta desconhecida: {0}.")]
    UnknownQuestion(String),

    #[error("Resposta inválida para \"{0}\".")]
    InvalidAnswer(&'static str),

    #[error("Nome é obrigatório!")]
    MissingContainerName,

    #[error("Este tipo de formulário não é aceito aqui.")]
    WrongFormType,

    #[error("Informe um e-mail válido.")]
    InvalidEmail,

    #[error("A senha deve ter pelo menos {0} caracteres.")]
    PasswordTooShort(usize),
}

/// Trims the value and reports whether anything is left.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trims an optional value, mapping blank strings to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
