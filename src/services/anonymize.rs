// src/services/anonymize.rs

// Mascaramento dos dados de contato do inquilino para visitantes.

use crate::models::tenant::TenantRecord;

fn stars(count: usize) -> String {
    "*".repeat(count)
}

/// "Maria Santos" -> "M***a S****s". Palavras com até 2 letras ficam como estão.
pub fn anonymize_name(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let chars: Vec<char> = word.chars().collect();
            if chars.len() <= 2 {
                return word.to_string();
            }
            let mut out = String::with_capacity(word.len());
            out.push(chars[0]);
            out.push_str(&stars(chars.len() - 2));
            out.push(chars[chars.len() - 1]);
            out
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "maria@exemplo.com" -> "ma***@exemplo.com".
pub fn anonymize_email(email: &str) -> String {
    let mut parts = email.split('@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return email.to_string();
    };
    if local.is_empty() || domain.is_empty() {
        return email.to_string();
    }
    let visible = 2;
    let local_len = local.chars().count();
    let head: String = local.chars().take(visible).collect();
    format!("{}{}@{}", head, stars(local_len.saturating_sub(visible)), domain)
}

/// "09171234567" -> "091*******7".
pub fn anonymize_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return phone.to_string();
    }
    let head: String = chars[..3].iter().collect();
    format!("{}{}{}", head, stars(chars.len() - 4), chars[chars.len() - 1])
}

impl TenantRecord {
    pub fn anonymized(&self) -> TenantRecord {
        TenantRecord {
            name: anonymize_name(&self.name),
            email: anonymize_email(&self.email),
            phone: anonymize_phone(&self.phone),
            ..self.clone()
        }
    }
}
