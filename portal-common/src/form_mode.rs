use serde::{Deserialize, Serialize};

/// Which form the auth card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Register,
}

#[allow(clippy::derivable_impls)]
impl Default for FormMode {
    fn default() -> Self {
        FormMode::Login
    }
}

impl FormMode {
    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        }
    }
}

/// Language of the page copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br", alias = "pt-BR")]
    PtBr,
}

/// Texts that change with the form mode.
///
/// The title is split so the view can emphasise the highlighted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCopy {
    pub title_lead: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub toggle_prompt: &'static str,
    pub toggle_action: &'static str,
    pub show_forgot_link: bool,
    pub username_label: &'static str,
    pub password_label: &'static str,
    pub forgot_label: &'static str,
}

impl Default for FormCopy {
    fn default() -> Self {
        Locale::default().copy(FormMode::default())
    }
}

/// Feedback texts generated locally rather than supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub empty_fields: &'static str,
    pub demo_success: &'static str,
    pub bridge_unavailable: &'static str,
}

impl Locale {
    pub fn copy(self, mode: FormMode) -> FormCopy {
        match (self, mode) {
            (Locale::En, FormMode::Login) => FormCopy {
                title_lead: "Sign in to your",
                title_highlight: "Account",
                subtitle: "Don't have an account yet? You can register one.",
                submit_label: "Sign in",
                toggle_prompt: "Don't have an account? ",
                toggle_action: "Create one now",
                show_forgot_link: true,
                username_label: "Username",
                password_label: "Password",
                forgot_label: "Forgot your password?",
            },
            (Locale::En, FormMode::Register) => FormCopy {
                title_lead: "Create your",
                title_highlight: "Account",
                subtitle: "Already have an account? You can sign in instead.",
                submit_label: "Create account",
                toggle_prompt: "Already have an account? ",
                toggle_action: "Sign in",
                show_forgot_link: false,
                username_label: "Username",
                password_label: "Password",
                forgot_label: "Forgot your password?",
            },
            (Locale::PtBr, FormMode::Login) => FormCopy {
                title_lead: "Realize o",
                title_highlight: "Login",
                subtitle: "Caso não tenha uma conta você pode realizar o registro.",
                submit_label: "Entrar",
                toggle_prompt: "Não tenho uma conta? ",
                toggle_action: "Criar uma agora",
                show_forgot_link: true,
                username_label: "Usuário",
                password_label: "Senha",
                forgot_label: "Esqueceu sua senha?",
            },
            (Locale::PtBr, FormMode::Register) => FormCopy {
                title_lead: "Crie sua",
                title_highlight: "Conta",
                subtitle: "Caso tenha uma conta você pode realizar o login.",
                submit_label: "Criar Conta",
                toggle_prompt: "Já tenho uma conta? ",
                toggle_action: "Fazer login",
                show_forgot_link: false,
                username_label: "Usuário",
                password_label: "Senha",
                forgot_label: "Esqueceu sua senha?",
            },
        }
    }

    pub fn messages(self) -> Messages {
        match self {
            Locale::En => Messages {
                empty_fields: "Fill in all fields!",
                demo_success: "Demo: the login would be sent to the host application.",
                bridge_unavailable: "Could not reach the application. Try again.",
            },
            Locale::PtBr => Messages {
                empty_fields: "Preencha todos os campos!",
                demo_success: "Demo: Login seria enviado ao servidor via CEF.",
                bridge_unavailable: "Não foi possível contatar o aplicativo. Tente novamente.",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_twice_is_identity() {
        assert_eq!(FormMode::Login.toggled().toggled(), FormMode::Login);
        assert_eq!(FormMode::Register.toggled(), FormMode::Login);
    }

    #[test]
    fn test_forgot_link_only_in_login() {
        for locale in [Locale::En, Locale::PtBr] {
            assert!(locale.copy(FormMode::Login).show_forgot_link);
            assert!(!locale.copy(FormMode::Register).show_forgot_link);
        }
    }

    #[test]
    fn test_copy_sets_are_distinct() {
        for locale in [Locale::En, Locale::PtBr] {
            let login = locale.copy(FormMode::Login);
            let register = locale.copy(FormMode::Register);
            assert_ne!(login.submit_label, register.submit_label);
            assert_ne!(login.toggle_action, register.toggle_action);
            assert_ne!(login.subtitle, register.subtitle);
        }
    }

    #[test]
    fn test_locale_deserializes_from_tag() {
        let locale: Locale = serde_json::from_str("\"pt-BR\"").unwrap();
        assert_eq!(locale, Locale::PtBr);
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }
}
