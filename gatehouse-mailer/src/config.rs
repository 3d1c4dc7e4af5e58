use crate::transports::TlsConfig;
use crate::{FileTransport, Mailer, MailerError, SmtpTransport};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    pub transport: TransportConfig,
    pub from_address: String,
    pub from_name: Option<String>,
    pub app_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransportConfig {
    Smtp {
        host: String,
        port: Option<u16>,
        username: Option<String>,
        password: Option<String>,
        tls: Option<TlsType>,
    },
    File {
        output_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsType {
    None,
    StartTls,
    Tls,
}

impl From<TlsType> for TlsConfig {
    fn from(tls_type: TlsType) -> Self {
        match tls_type {
            TlsType::None => TlsConfig::None,
            TlsType::StartTls => TlsConfig::StartTls,
            TlsType::Tls => TlsConfig::Tls,
        }
    }
}

impl MailerConfig {
    /// Read mailer settings from the environment. `SMTP_HOST` selects the
    /// SMTP transport; without it, messages are written to `MAIL_OUTPUT_DIR`
    /// (default `./outbox`) for development.
    pub fn from_env() -> Result<Self, MailerError> {
        let transport = if let Ok(smtp_host) = std::env::var("SMTP_HOST") {
            TransportConfig::Smtp {
                host: smtp_host,
                port: std::env::var("SMTP_PORT").ok().and_then(|p| p.parse().ok()),
                username: std::env::var("SMTP_USER").ok(),
                password: std::env::var("SMTP_PASS").ok(),
                tls: std::env::var("SMTP_TLS")
                    .ok()
                    .and_then(|t| match t.to_lowercase().as_str() {
                        "none" => Some(TlsType::None),
                        "starttls" => Some(TlsType::StartTls),
                        "tls" => Some(TlsType::Tls),
                        _ => None,
                    }),
            }
        } else {
            TransportConfig::File {
                output_dir: std::env::var("MAIL_OUTPUT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./outbox")),
            }
        };

        let from_address = std::env::var("EMAIL_FROM")
            .map_err(|_| MailerError::Config("EMAIL_FROM is required".to_string()))?;

        Ok(Self {
            transport,
            from_address,
            from_name: std::env::var("EMAIL_FROM_NAME").ok(),
            app_name: std::env::var("APP_NAME").unwrap_or_else(|_| "Gatehouse".to_string()),
        })
    }

    /// Construct the transport described by this configuration.
    pub fn build_transport(&self) -> Result<Box<dyn Mailer>, MailerError> {
        match &self.transport {
            TransportConfig::Smtp {
                host,
                port,
                username,
                password,
                tls,
            } => {
                let mut builder = SmtpTransport::builder(host);

                if let Some(port) = port {
                    builder = builder.port(*port);
                }

                if let (Some(username), Some(password)) = (username, password) {
                    builder = builder.credentials(username, password);
                }

                if let Some(tls) = tls {
                    builder = builder.tls(tls.clone().into());
                }

                Ok(Box::new(builder.build()?))
            }
            TransportConfig::File { output_dir } => Ok(Box::new(FileTransport::new(output_dir)?)),
        }
    }

    /// The RFC 5322 From header value, with the display name when configured.
    pub fn sender(&self) -> String {
        match &self.from_name {
            Some(name) => format!("{name} <{}>", self.from_address),
            None => self.from_address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_with_display_name() {
        let config = MailerConfig {
            transport: TransportConfig::File {
                output_dir: PathBuf::from("/tmp"),
            },
            from_address: "noreply@example.com".to_string(),
            from_name: Some("Gatehouse".to_string()),
            app_name: "Gatehouse".to_string(),
        };

        assert_eq!(config.sender(), "Gatehouse <noreply@example.com>");
    }

    #[test]
    fn test_sender_without_display_name() {
        let config = MailerConfig {
            transport: TransportConfig::File {
                output_dir: PathBuf::from("/tmp"),
            },
            from_address: "noreply@example.com".to_string(),
            from_name: None,
            app_name: "Gatehouse".to_string(),
        };

        assert_eq!(config.sender(), "noreply@example.com");
    }

    #[test]
    fn test_build_file_transport() {
        let dir = tempfile::tempdir().unwrap();
        let config = MailerConfig {
            transport: TransportConfig::File {
                output_dir: dir.path().to_path_buf(),
            },
            from_address: "noreply@example.com".to_string(),
            from_name: None,
            app_name: "Gatehouse".to_string(),
        };

        assert!(config.build_transport().is_ok());
    }
}
