use poem_openapi::{
    Object,
    types::{ParseFromJSON, ToJSON},
};

/// Success envelope: `{ success: true, data, message? }`.
#[derive(Object, Debug, Clone)]
pub struct Envelope<T: ParseFromJSON + ToJSON> {
    pub success: bool,
    pub data: T,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl<T: ParseFromJSON + ToJSON> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Message-only success envelope returned by deletions.
#[derive(Object, Debug, Clone)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
