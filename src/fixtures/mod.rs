//! Canned Marketo API payloads for tests.

/// Token endpoint success payload
pub const TOKEN_RESPONSE: &str = r#"{
    "access_token": "fixture-token",
    "token_type": "bearer",
    "expires_in": 3599,
    "scope": "api_user@example.com"
}"#;

/// Envelope with one lead record
pub const LEAD_ENVELOPE: &str = r#"{
    "requestId": "e42b#14272d07d78",
    "success": true,
    "result": [
        {"id": 318581, "email": "a@b.com", "firstName": "Ada", "lastName": "Lovelace"}
    ]
}"#;

/// Envelope with created-lead write results
pub const CREATE_LEADS_ENVELOPE: &str = r#"{
    "requestId": "811e#14272d08b54",
    "success": true,
    "result": [
        {"id": 318581, "status": "created"}
    ]
}"#;

/// Envelope with two static lists
pub const LISTS_ENVELOPE: &str = r#"{
    "requestId": "b9d1#14272d5fd7c",
    "success": true,
    "result": [
        {"id": 100, "name": "Newsletter", "programName": "NL-2024", "workspaceName": "Default"},
        {"id": 101, "name": "Webinar", "workspaceName": "Default"}
    ]
}"#;

/// Envelope with membership statuses
pub const MEMBERSHIP_ENVELOPE: &str = r#"{
    "requestId": "c24f#14272d9a41b",
    "success": true,
    "result": [
        {"id": 1, "status": "memberof"},
        {"id": 2, "status": "notmemberof"},
        {"id": 3, "status": "memberof"}
    ]
}"#;

/// Envelope with one campaign
pub const CAMPAIGN_ENVELOPE: &str = r#"{
    "requestId": "d81a#14272daeb09",
    "success": true,
    "result": [
        {"id": 1004, "name": "Welcome Drip", "type": "trigger", "active": true}
    ]
}"#;

/// Envelope with list add results
pub const ADD_TO_LIST_ENVELOPE: &str = r#"{
    "requestId": "f34c#14273a0ce12",
    "success": true,
    "result": [
        {"id": 1, "status": "added"},
        {"id": 2, "status": "skipped", "reasons": [{"code": "1015", "message": "Lead already in list"}]}
    ]
}"#;

/// Failed envelope with a remote error entry
pub const ERROR_ENVELOPE: &str = r#"{
    "requestId": "a1b2#14272dc5d39",
    "success": false,
    "errors": [
        {"code": "1006", "message": "Field 'custom' not found"}
    ]
}"#;
