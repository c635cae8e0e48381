/// Representative IV response payloads for tests.
///
/// Trimmed from real NWIS responses for the Illinois River at Kingston
/// Mines: two discharge methods plus a precipitation gauge.

/// Discharge from two methods (the second listed out of time order) and a
/// precipitation series. The third discharge point is ice-affected and
/// carries the -999999 sentinel.
pub const KINGSTON_MINES_TWO_METHODS: &str = r#"{
  "value": {
    "timeSeries": [
      {
        "name": "USGS:05568500:00060:00000",
        "sourceInfo": {
          "siteName": "ILLINOIS RIVER AT KINGSTON MINES, IL",
          "siteCode": [{ "value": "05568500", "agencyCode": "USGS" }]
        },
        "variable": {
          "variableCode": [{ "value": "00060", "network": "NWIS" }],
          "variableName": "Streamflow, ft&#179;/s",
          "unit": { "unitCode": "ft3/s" },
          "noDataValue": -999999.0
        },
        "values": [
          {
            "value": [
              { "value": "42300", "qualifiers": ["A"], "dateTime": "2024-01-10T12:00:00.000-06:00" },
              { "value": "42100", "qualifiers": ["A"], "dateTime": "2024-01-10T12:15:00.000-06:00" },
              { "value": "-999999", "qualifiers": ["P", "Ice"], "dateTime": "2024-01-10T12:30:00.000-06:00" },
              { "value": "-999999", "qualifiers": ["P", "Ice"], "dateTime": "2024-01-10T12:45:00.000-06:00" },
              { "value": "41800", "qualifiers": ["P", "e"], "dateTime": "2024-01-10T13:00:00.000-06:00" }
            ],
            "method": [{ "methodDescription": "", "methodID": 69928 }]
          },
          {
            "value": [
              { "value": "42010", "qualifiers": ["P"], "dateTime": "2024-01-10T12:15:00.000-06:00" },
              { "value": "42000", "qualifiers": ["P"], "dateTime": "2024-01-10T12:00:00.000-06:00" }
            ],
            "method": [{ "methodDescription": "[Backup sensor]", "methodID": 69929 }]
          }
        ]
      },
      {
        "name": "USGS:05568500:00045:00006",
        "variable": {
          "variableCode": [{ "value": "00045", "network": "NWIS" }],
          "noDataValue": -999999.0
        },
        "values": [
          {
            "value": [
              { "value": "0.01", "qualifiers": ["P"], "dateTime": "2024-01-10T12:00:00.000-06:00" },
              { "value": "0.02", "qualifiers": ["P"], "dateTime": "2024-01-10T12:15:00.000-06:00" },
              { "value": "-999999", "qualifiers": ["P", "Eqp"], "dateTime": "2024-01-10T12:30:00.000-06:00" },
              { "value": "0.04", "qualifiers": ["P"], "dateTime": "2024-01-10T12:45:00.000-06:00" }
            ],
            "method": [{ "methodID": "11" }]
          }
        ]
      }
    ]
  }
}"#;

/// A single series whose only point has a non-numeric value.
pub const BAD_VALUE: &str = r#"{
  "value": {
    "timeSeries": [
      {
        "name": "USGS:05568500:00065:00000",
        "variable": { "variableCode": [{ "value": "00065" }], "noDataValue": -999999.0 },
        "values": [
          {
            "value": [{ "value": "n/a", "qualifiers": ["P"], "dateTime": "2024-01-10T12:00:00.000-06:00" }],
            "method": [{ "methodID": 1 }]
          }
        ]
      }
    ]
  }
}"#;
