use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawComment {
  pub(crate) created_at_ms: i64,
  pub(crate) id: String,
  pub(crate) message: String,
  pub(crate) user_id: String,
}

#[cfg(test)]
impl RawComment {
  pub(crate) fn at(id: &str, created_at_ms: i64) -> Self {
    Self {
      created_at_ms,
      id: id.to_string(),
      message: format!("message {id}"),
      user_id: format!("user-{id}"),
    }
  }
}
