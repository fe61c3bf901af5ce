use serde_json::{Map, Value};

use crate::errors::*;
use crate::ontology::Message;

/// Payload of a classification call, either one text or a list of texts
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationRequest {
    Single(String),
    Batch(Vec<String>),
}

impl ClassificationRequest {
    pub fn from_json(payload: &str) -> Result<Self> {
        let object = parse_object(payload)?;
        if let Some(text) = object.get("texto") {
            return text
                .as_str()
                .map(|t| ClassificationRequest::Single(t.to_string()))
                .ok_or_else(|| invalid_input("field 'texto' must be a string"));
        }
        if let Some(texts) = object.get("textos") {
            return texts
                .as_array()
                .and_then(|values| {
                    values
                        .iter()
                        .map(|value| value.as_str().map(|t| t.to_string()))
                        .collect::<Option<Vec<String>>>()
                })
                .map(ClassificationRequest::Batch)
                .ok_or_else(|| invalid_input("field 'textos' must be a list of strings"));
        }
        Err(invalid_input("expected a 'texto' or a 'textos' field"))
    }

    pub fn texts(&self) -> Vec<&str> {
        match self {
            ClassificationRequest::Single(text) => vec![text.as_str()],
            ClassificationRequest::Batch(texts) => texts.iter().map(|t| t.as_str()).collect(),
        }
    }
}

/// Payload of a conversation analysis call
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationRequest {
    pub messages: Vec<Message>,
}

impl ConversationRequest {
    pub fn from_json(payload: &str) -> Result<Self> {
        let object = parse_object(payload)?;
        let values = object
            .get("mensagens")
            .and_then(|messages| messages.as_array())
            .ok_or_else(|| invalid_input("field 'mensagens' must be a list"))?;
        let messages = values
            .iter()
            .enumerate()
            .map(|(ix, value)| parse_message(ix, value))
            .collect::<Result<Vec<Message>>>()?;
        Ok(Self { messages })
    }
}

fn parse_message(ix: usize, value: &Value) -> Result<Message> {
    let text = value
        .get("texto")
        .and_then(|text| text.as_str())
        .ok_or_else(|| {
            invalid_input(&format!(
                "message {} must be an object with a string 'texto' field",
                ix
            ))
        })?;
    let timestamp = match value.get("timestamp") {
        None | Some(Value::Null) => None,
        Some(Value::String(timestamp)) => Some(timestamp.as_str()),
        Some(_) => {
            return Err(invalid_input(&format!(
                "field 'timestamp' of message {} must be a string",
                ix
            )))
        }
    };
    Ok(Message::new(text, timestamp))
}

fn parse_object(payload: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(payload) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(invalid_input("payload must be a JSON object")),
        Err(e) => Err(invalid_input(&format!("invalid JSON payload: {}", e))),
    }
}

fn invalid_input(message: &str) -> ::failure::Error {
    NeuronError::InvalidInput(message.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid_input<T: std::fmt::Debug>(result: Result<T>) {
        let error = result.unwrap_err();
        assert!(
            error.downcast_ref::<NeuronError>().map_or(false, |e| match e {
                NeuronError::InvalidInput(_) => true,
                _ => false,
            }),
            "unexpected error: {}",
            error
        );
    }

    #[test]
    fn classification_request_works() {
        assert_eq!(
            ClassificationRequest::Single("hoje estou muito feliz".to_string()),
            ClassificationRequest::from_json(r#"{"texto": "hoje estou muito feliz"}"#).unwrap()
        );
        let batch =
            ClassificationRequest::from_json(r#"{"textos": ["estou animado", "que medo"]}"#)
                .unwrap();
        assert_eq!(vec!["estou animado", "que medo"], batch.texts());
    }

    #[test]
    fn classification_request_rejects_malformed_payloads() {
        assert_invalid_input(ClassificationRequest::from_json("{texto"));
        assert_invalid_input(ClassificationRequest::from_json(r#"["texto"]"#));
        assert_invalid_input(ClassificationRequest::from_json(r#"{"mensagem": "oi"}"#));
        assert_invalid_input(ClassificationRequest::from_json(r#"{"texto": 3}"#));
        assert_invalid_input(ClassificationRequest::from_json(r#"{"textos": "oi"}"#));
        assert_invalid_input(ClassificationRequest::from_json(r#"{"textos": ["oi", 2]}"#));
    }

    #[test]
    fn conversation_request_works() {
        // Given
        let payload = r#"{
            "mensagens": [
                {"timestamp": "2024-01-01T10:00:00", "texto": "estou feliz com a entrega"},
                {"texto": "estou preocupado com o prazo"},
                {"texto": "sem data", "timestamp": null}
            ]
        }"#;

        // When
        let request = ConversationRequest::from_json(payload).unwrap();

        // Then
        let expected_messages = vec![
            Message::new("estou feliz com a entrega", Some("2024-01-01T10:00:00")),
            Message::new("estou preocupado com o prazo", None),
            Message::new("sem data", None),
        ];
        assert_eq!(expected_messages, request.messages);
    }

    #[test]
    fn conversation_request_rejects_malformed_payloads() {
        assert_invalid_input(ConversationRequest::from_json(r#"{"mensagens": "oi"}"#));
        assert_invalid_input(ConversationRequest::from_json(r#"{"mensagens": [{"data": 1}]}"#));
        assert_invalid_input(ConversationRequest::from_json(r#"{"mensagens": ["oi"]}"#));
        assert_invalid_input(ConversationRequest::from_json(
            r#"{"mensagens": [{"texto": "oi", "timestamp": 12}]}"#,
        ));
    }
}
