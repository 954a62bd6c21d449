use crate::worker::Request;
use wasm_bindgen::prelude::*;

/// Evaluate one JSON-encoded [`Request`] and return the JSON-encoded result.
///
/// Meant to be called from inside a browser web worker, one message in and
/// one message out.
#[wasm_bindgen]
pub fn equity(request: &str) -> Result<String, JsValue> {
    Request::try_from(request)
        .map(Request::bounded)
        .and_then(|request| request.evaluate())
        .and_then(|result| Ok(serde_json::to_string(&result)?))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The hand category label for a space-separated set of 5 to 7 cards.
#[wasm_bindgen]
pub fn category(cards: &str) -> Result<String, JsValue> {
    use crate::cards::Hand;
    use crate::evaluation::Bitwise;
    use crate::evaluation::Evaluate;
    let hand = Hand::try_from(cards).map_err(|e| JsValue::from_str(&e))?;
    Bitwise
        .evaluate(hand)
        .map(|strength| strength.category().label().to_string())
        .ok_or_else(|| JsValue::from_str("need 5 to 7 cards"))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn equity_round_trip() {
        let json = equity(r#"{"heroCards":["As","Ks"],"boardCards":["Qs","Js","2d"],"iterations":200,"seed":1}"#)
            .unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(value["handName"], "High Card");
    }

    #[wasm_bindgen_test]
    fn category_of_a_flush() {
        assert_eq!(category("As Ks 9s 4s 2s").unwrap(), "Flush");
    }
}
