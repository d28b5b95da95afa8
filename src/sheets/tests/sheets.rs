// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
mod tests {
    use gax::error::rpc::Code;
    use google_cloud_rest_sheets::client::Sheets;
    use google_cloud_rest_sheets::model::{
        BatchUpdateSpreadsheetRequest, Dimension, Request, SheetProperties, Spreadsheet,
        SpreadsheetProperties, ValueRange,
    };
    use google_cloud_rest_test_utils::credentials::test_credentials;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<Sheets> {
        let client = Sheets::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(test_credentials())
            .with_project_id("test-project")
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/spreadsheets/abc123"),
                request::headers(contains(("authorization", "Bearer test-only-token"))),
                request::query(url_decoded(contains(("fields", "spreadsheetId,properties")))),
                request::query(url_decoded(contains(("includeGridData", "false")))),
                request::query(url_decoded(contains(("ranges", "Sheet1!A1:B2")))),
                request::query(url_decoded(contains(("ranges", "Sheet2!C3")))),
            ])
            .respond_with(json_encoded(json!({
                "spreadsheetId": "abc123",
                "properties": {"title": "Budget"},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get("abc123")
            .with_query_parameter("fields", "spreadsheetId,properties")
            .with_include_grid_data(false)
            .with_ranges(["Sheet1!A1:B2", "Sheet2!C3"])
            .send()
            .await?;
        assert_eq!(got.spreadsheet_id, "abc123");
        assert_eq!(
            got.properties,
            Some(SpreadsheetProperties::new().set_title("Budget"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_not_found() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v4/spreadsheets/missing"))
                .respond_with(
                    status_code(404)
                        .insert_header("content-type", "application/json")
                        .body(
                            json!({"error": {
                                "code": 404,
                                "message": "Requested entity was not found.",
                                "status": "NOT_FOUND",
                            }})
                            .to_string(),
                        ),
                ),
        );

        let client = test_client(&server).await?;
        let err = client.get("missing").send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_id() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.get("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/spreadsheets"),
                request::body(json_decoded(eq(json!({"properties": {"title": "New"}})))),
            ])
            .respond_with(json_encoded(json!({
                "spreadsheetId": "new-id",
                "properties": {"title": "New"},
                "sheets": [{"properties": {"sheetId": 0, "title": "Sheet1"}}],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .create()
            .with_spreadsheet(
                Spreadsheet::new().set_properties(SpreadsheetProperties::new().set_title("New")),
            )
            .send()
            .await?;
        assert_eq!(got.spreadsheet_id, "new-id");
        assert_eq!(got.sheets.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn create_without_template() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/v4/spreadsheets"))
                .respond_with(json_encoded(json!({"spreadsheetId": "new-id"}))),
        );

        let client = test_client(&server).await?;
        let got = client.create().send().await?;
        assert_eq!(got.spreadsheet_id, "new-id");
        Ok(())
    }

    #[tokio::test]
    async fn copy_sheet() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/spreadsheets/A/sheets/0:copyTo"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"destinationSpreadsheetId": "B"})))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "sheetId": 123,
                "title": "Copy of Sheet1",
                "index": 1,
                "sheetType": "GRID",
                "gridProperties": {"rowCount": 1000, "columnCount": 26},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client.copy_sheet(0, "A", "B").send().await?;
        assert_eq!(got.sheet_id, Some(123));
        assert_eq!(got.title.as_deref(), Some("Copy of Sheet1"));
        assert_eq!(got.index, Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn delete_sheet() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/spreadsheets/abc123:batchUpdate"),
                request::body(json_decoded(eq(json!({
                    "requests": [{"deleteSheet": {"sheetId": 42}}]
                })))),
            ])
            .respond_with(json_encoded(json!({
                "spreadsheetId": "abc123",
                "replies": [{}],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client.delete_sheet("abc123", 42).send().await?;
        assert_eq!(got.spreadsheet_id, "abc123");
        assert_eq!(got.replies, vec![json!({})]);
        Ok(())
    }

    #[tokio::test]
    async fn batch_update() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v4/spreadsheets/abc123:batchUpdate"),
                request::body(json_decoded(eq(json!({
                    "requests": [{"addSheet": {"properties": {"title": "Totals"}}}],
                    "includeSpreadsheetInResponse": true,
                })))),
            ])
            .respond_with(json_encoded(json!({
                "spreadsheetId": "abc123",
                "replies": [{"addSheet": {"properties": {"sheetId": 7, "title": "Totals"}}}],
                "updatedSpreadsheet": {"spreadsheetId": "abc123"},
            }))),
        );

        let client = test_client(&server).await?;
        let request = BatchUpdateSpreadsheetRequest::new()
            .set_requests([Request::new().set_add_sheet(
                google_cloud_rest_sheets::model::AddSheetRequest::new()
                    .set_properties(SheetProperties::new().set_title("Totals")),
            )])
            .set_include_spreadsheet_in_response(true);
        let got = client.batch_update("abc123", request).send().await?;
        assert_eq!(got.replies.len(), 1);
        assert_eq!(
            got.updated_spreadsheet.map(|s| s.spreadsheet_id),
            Some("abc123".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_values() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/v4/spreadsheets/abc123/values/Sheet1%21A1%3AB2"),
                request::query(url_decoded(contains(("valueInputOption", "USER_ENTERED")))),
                request::body(json_decoded(eq(json!({
                    "range": "Sheet1!A1:B2",
                    "majorDimension": "ROWS",
                    "values": [["a", "b"], ["c", "d"]],
                })))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "spreadsheetId": "abc123",
                "updatedRange": "Sheet1!A1:B2",
                "updatedRows": 2,
                "updatedColumns": 2,
                "updatedCells": 4,
            }))),
        );

        let client = test_client(&server).await?;
        let values = ValueRange::new()
            .set_range("Sheet1!A1:B2")
            .set_major_dimension(Dimension::Rows)
            .set_values([["a", "b"], ["c", "d"]]);
        let got = client.update_values("abc123", values).send().await?;
        assert_eq!(got.updated_cells, 4);
        assert_eq!(got.updated_rows, 2);
        assert_eq!(got.updated_columns, 2);
        assert_eq!(got.updated_range, "Sheet1!A1:B2");
        Ok(())
    }

    #[tokio::test]
    async fn update_values_raw() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/v4/spreadsheets/abc123/values/A1"),
                request::query(url_decoded(contains(("valueInputOption", "RAW")))),
                request::query(url_decoded(not(contains(("valueInputOption", "USER_ENTERED"))))),
            ])
            .respond_with(json_encoded(json!({"updatedCells": 1}))),
        );

        let client = test_client(&server).await?;
        let values = ValueRange::new().set_range("A1").set_values([["=1+1"]]);
        let got = client
            .update_values("abc123", values)
            .with_value_input_option("RAW")
            .send()
            .await?;
        assert_eq!(got.updated_cells, 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_values_missing_range() -> Result<()> {
        // No expectations, the request must not reach the server.
        let server = Server::run();
        let client = test_client(&server).await?;
        let values = ValueRange::new().set_values([["a"]]);
        let err = client
            .update_values("abc123", values)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_values() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v4/spreadsheets/abc123/values/Sheet1%21A1%3AB2"),
                request::query(url_decoded(contains(("majorDimension", "COLUMNS")))),
            ])
            .respond_with(json_encoded(json!({
                "range": "Sheet1!A1:B2",
                "majorDimension": "COLUMNS",
                "values": [["a", "c"], ["b", "d"]],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_values("abc123", "Sheet1!A1:B2")
            .with_major_dimension(Dimension::Columns)
            .send()
            .await?;
        let want = ValueRange::new()
            .set_range("Sheet1!A1:B2")
            .set_major_dimension(Dimension::Columns)
            .set_values([["a", "c"], ["b", "d"]]);
        assert_eq!(got, want);
        Ok(())
    }
}
