//! Croma inventory API client: one fixed POST payload per item, and a
//! three-way read of the nested promise response.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

const ORIGIN: &str = "https://www.croma.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// JSON path the vendor reports sourcing options under. Non-empty
/// array means at least one fulfillment option exists for the pincode.
const PROMISE_LINE_PATH: &str = "/promise/suggestedOption/option/promiseLines/promiseLine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock,
    OutOfStock,
    /// Network error, non-2xx status, or a body we could not parse.
    Unknown,
}

#[derive(Debug, Serialize)]
pub struct PromiseRequest {
    promise: Promise,
}

#[derive(Debug, Serialize)]
struct Promise {
    #[serde(rename = "allocationRuleID")]
    allocation_rule_id: &'static str,
    #[serde(rename = "checkInventory")]
    check_inventory: &'static str,
    #[serde(rename = "organizationCode")]
    organization_code: &'static str,
    #[serde(rename = "sourcingClassification")]
    sourcing_classification: &'static str,
    #[serde(rename = "promiseLines")]
    promise_lines: PromiseLines,
}

#[derive(Debug, Serialize)]
struct PromiseLines {
    #[serde(rename = "promiseLine")]
    promise_line: Vec<PromiseLine>,
}

#[derive(Debug, Serialize)]
struct PromiseLine {
    #[serde(rename = "fulfillmentType")]
    fulfillment_type: &'static str,
    mch: &'static str,
    #[serde(rename = "itemID")]
    item_id: String,
    #[serde(rename = "lineId")]
    line_id: &'static str,
    #[serde(rename = "categoryType")]
    category_type: &'static str,
    #[serde(rename = "reEndDate")]
    re_end_date: &'static str,
    #[serde(rename = "reqStartDate")]
    req_start_date: &'static str,
    #[serde(rename = "requiredQty")]
    required_qty: &'static str,
    #[serde(rename = "shipToAddress")]
    ship_to_address: ShipToAddress,
    extn: LineExtn,
}

#[derive(Debug, Serialize)]
struct ShipToAddress {
    company: &'static str,
    country: &'static str,
    city: &'static str,
    #[serde(rename = "mobilePhone")]
    mobile_phone: &'static str,
    state: &'static str,
    #[serde(rename = "zipCode")]
    zip_code: String,
    extn: AddressExtn,
}

#[derive(Debug, Serialize)]
struct AddressExtn {
    #[serde(rename = "irlAddressLine1")]
    irl_address_line1: &'static str,
    #[serde(rename = "irlAddressLine2")]
    irl_address_line2: &'static str,
}

#[derive(Debug, Serialize)]
struct LineExtn {
    #[serde(rename = "widerStoreFlag")]
    wider_store_flag: &'static str,
}

impl PromiseRequest {
    /// Home-delivery availability probe for one item at one pincode.
    /// Everything except `itemID` and `zipCode` is a vendor constant.
    pub fn new(item_id: &str, zip_code: &str) -> Self {
        Self {
            promise: Promise {
                allocation_rule_id: "SYSTEM",
                check_inventory: "Y",
                organization_code: "CROMA",
                sourcing_classification: "EC",
                promise_lines: PromiseLines {
                    promise_line: vec![PromiseLine {
                        fulfillment_type: "HDEL",
                        mch: "",
                        item_id: item_id.to_string(),
                        line_id: "1",
                        category_type: "nonMobile",
                        re_end_date: "2500-01-01",
                        req_start_date: "",
                        required_qty: "1",
                        ship_to_address: ShipToAddress {
                            company: "",
                            country: "",
                            city: "",
                            mobile_phone: "",
                            state: "",
                            zip_code: zip_code.to_string(),
                            extn: AddressExtn {
                                irl_address_line1: "",
                                irl_address_line2: "",
                            },
                        },
                        extn: LineExtn {
                            wider_store_flag: "N",
                        },
                    }],
                },
            },
        }
    }
}

/// A 200 response with the promise-line array populated is in stock;
/// a 200 response without it is out of stock.
pub fn classify(body: &Value) -> Availability {
    match body.pointer(PROMISE_LINE_PATH).and_then(Value::as_array) {
        Some(lines) if !lines.is_empty() => Availability::InStock,
        _ => Availability::OutOfStock,
    }
}

pub async fn check_availability(
    client: &Client,
    api_url: &str,
    item_id: &str,
    zip_code: &str,
) -> Availability {
    let payload = PromiseRequest::new(item_id, zip_code);

    let resp = client
        .post(api_url)
        .header("accept", "application/json, text/plain, */*")
        .header("origin", ORIGIN)
        .header("referer", format!("{}/", ORIGIN))
        .header("user-agent", USER_AGENT)
        .json(&payload)
        .send()
        .await;

    let resp = match resp {
        Ok(r) => r,
        Err(e) => {
            warn!("Request error for item {}: {}", item_id, e);
            return Availability::Unknown;
        }
    };

    if !resp.status().is_success() {
        warn!("Unexpected status {} for item {}", resp.status(), item_id);
        return Availability::Unknown;
    }

    match resp.json::<Value>().await {
        Ok(body) => classify(&body),
        Err(e) => {
            warn!("Malformed response for item {}: {}", item_id, e);
            Availability::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_substitutes_item_and_pincode() {
        let body = serde_json::to_value(PromiseRequest::new("305639", "560085")).unwrap();

        assert_eq!(
            body.pointer("/promise/promiseLines/promiseLine/0/itemID"),
            Some(&json!("305639"))
        );
        assert_eq!(
            body.pointer("/promise/promiseLines/promiseLine/0/shipToAddress/zipCode"),
            Some(&json!("560085"))
        );
    }

    #[test]
    fn payload_carries_vendor_constants() {
        let body = serde_json::to_value(PromiseRequest::new("305639", "560085")).unwrap();

        assert_eq!(body.pointer("/promise/organizationCode"), Some(&json!("CROMA")));
        assert_eq!(body.pointer("/promise/checkInventory"), Some(&json!("Y")));
        assert_eq!(
            body.pointer("/promise/promiseLines/promiseLine/0/fulfillmentType"),
            Some(&json!("HDEL"))
        );
        assert_eq!(
            body.pointer("/promise/promiseLines/promiseLine/0/extn/widerStoreFlag"),
            Some(&json!("N"))
        );
        assert_eq!(
            body.pointer("/promise/promiseLines/promiseLine/0/shipToAddress/extn/irlAddressLine1"),
            Some(&json!(""))
        );
    }

    #[test]
    fn non_empty_promise_line_is_in_stock() {
        let body = json!({
            "promise": {
                "suggestedOption": {
                    "option": {
                        "promiseLines": {
                            "promiseLine": [{"itemID": "305639", "shipNode": "WH1"}]
                        }
                    }
                }
            }
        });
        assert_eq!(classify(&body), Availability::InStock);
    }

    #[test]
    fn empty_promise_line_is_out_of_stock() {
        let body = json!({
            "promise": {
                "suggestedOption": {
                    "option": {"promiseLines": {"promiseLine": []}}
                }
            }
        });
        assert_eq!(classify(&body), Availability::OutOfStock);
    }

    #[test]
    fn missing_path_is_out_of_stock() {
        assert_eq!(classify(&json!({"promise": {}})), Availability::OutOfStock);
        assert_eq!(classify(&json!({})), Availability::OutOfStock);
    }

    #[test]
    fn non_array_promise_line_is_out_of_stock() {
        let body = json!({
            "promise": {
                "suggestedOption": {
                    "option": {"promiseLines": {"promiseLine": "unexpected"}}
                }
            }
        });
        assert_eq!(classify(&body), Availability::OutOfStock);
    }
}
