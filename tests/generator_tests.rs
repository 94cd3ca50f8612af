#![allow(clippy::unwrap_used, clippy::expect_used)]

use fsdgen_python::generator::{
    ordered_request_fields, render_path_as_python_fstring, CodeGenOutput, PythonGenerator,
};
use fsdgen_python::model::{HttpFieldKind, HttpMethodInfo, HttpServiceInfo};
use fsdgen_python::GenError;
use std::sync::Arc;

mod common;
use common::model::{bind, field, load_example, method, service};

fn generate_example(no_http: bool) -> CodeGenOutput {
    let model = load_example();
    let generator = PythonGenerator {
        generator_name: "fsdgen-python".to_string(),
        no_http,
    };
    generator
        .generate_output(model.service, model.http_service)
        .unwrap()
}

fn example_text() -> String {
    let output = generate_example(false);
    assert_eq!(output.files.len(), 1);
    output.file("example_api.py").unwrap().text()
}

#[test]
fn test_example_header() {
    let text = example_text();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("# DO NOT EDIT: generated by fsdgen-python"));
    assert_eq!(lines.next(), Some("\"\"\""));
    assert_eq!(lines.next(), Some("Example service for widgets."));
    assert!(text.contains("\nimport decimal\nimport enum\nimport typing\n\nimport facility\n"));
}

#[test]
fn test_example_enums() {
    let text = example_text();
    assert!(text.contains("class WidgetOrder(enum.Enum):\n    \"\"\"\n    How to order widgets.\n    \"\"\"\n    ID_ = 'id'\n    NAME = 'name'\n    WEIGHT = 'weight'\n"));
    assert!(text.contains("class WidgetJobStatus(enum.Enum):\n    PENDING = 'pending'\n    RUNNING = 'running'\n    DONE = 'done'\n"));
    assert!(!text.contains("ABANDONED"));
}

#[test]
fn test_example_dtos() {
    let text = example_text();
    assert!(text.contains(
        "    def __init__(self, *, id_: str = None, name: str = None, weight: float = None, price: decimal.Decimal = None, tags: typing.Dict[str, str] = None, last_modified: str = None, thumbnail: bytes = None):"
    ));
    assert!(text.contains("        assert price is None or isinstance(price, decimal.Decimal)"));
    assert!(text.contains("            data['lastModified'] = self.last_modified\n"));
    assert!(text.contains("            data['thumbnail'] = facility.DTO._create_data_value(self.thumbnail)\n"));
    assert!(text.contains("            id_=data['id'] if data.get('id') is not None else None,\n"));
    assert!(text.contains(
        "            status=WidgetJobStatus(data['status']) if data.get('status') is not None else None,\n"
    ));
    assert!(!text.contains("legacy"));
    assert!(!text.contains("KitchenSink"));
}

#[test]
fn test_example_error_set() {
    let text = example_text();
    assert!(text.contains("class ExampleApiErrors:"));
    assert!(text.contains("    # The user is not an administrator.\n    NOT_ADMIN = 'NotAdmin'\n"));
    assert!(text.contains("    TOO_HAPPY = 'TooHappy'"));
    assert!(!text.contains("DEPRECATED"));
}

#[test]
fn test_example_client_signatures() {
    let text = example_text();
    assert!(text.contains("class Client(facility.ClientBase):"));
    assert!(text.contains(
        "    def get_widgets(self, *, query: str = None, limit: int = None, order: \"WidgetOrder\" = None) -> facility.Result[GetWidgetsResponse]:"
    ));
    assert!(text.contains(
        "    def create_widget(self, *, widget: \"Widget\") -> facility.Result[CreateWidgetResponse]:"
    ));
    assert!(text.contains(
        "    def get_widget(self, *, if_none_match: str = None, id_: str) -> facility.Result[GetWidgetResponse]:"
    ));
    assert!(text.contains(
        "    def edit_widget(self, *, id_: str, ops: typing.List[object], weight: typing.Optional[float] = None) -> facility.Result[EditWidgetResponse]:"
    ));
    assert!(!text.contains("def kitchen"));
}

#[test]
fn test_example_client_bodies() {
    let text = example_text();
    assert!(text.contains("        uri_ = \"/widgets\"\n"));
    assert!(text.contains("            query_['q'] = query\n"));
    assert!(text.contains("            query_['order'] = order.value\n"));
    assert!(text.contains("        uri_ = f\"/widgets/{facility.encode(id_)}\"\n"));
    assert!(text.contains("        request_ = facility.DTO._create_data_value(widget)\n"));
    assert!(text.contains("            request_['ops'] = facility.DTO._create_data_value(ops)\n"));
    assert!(text.contains(
        "        response_ = self.send_request('DELETE', uri_, query=query_, request=request_, headers=headers_)\n"
    ));
    assert!(text.contains("        if response_.status_code == 201:  # Created\n"));
    assert!(text.contains("        if response_.status_code == 204:  # No Content\n            value_ = DeleteWidgetResponse()\n"));
    assert!(text.contains("            value_ = DeleteWidgetResponse(not_found=True)\n"));
    assert!(text.contains("            value_ = GetWidgetsResponse.from_data(response_.json())\n"));
    assert!(text.contains("            value_ = GetWidgetBatchResponse(results=response_.json())\n"));
    assert!(text.contains("        return facility.Result(error=facility.Error.from_response(response_))\n"));
}

#[test]
fn test_example_output_is_normalized() {
    let text = example_text();
    assert!(text.ends_with("response_))\n"));
    assert!(!text.ends_with("\n\n"));
    assert!(!text.contains("\n\n\n\n"));
    assert!(text.lines().all(|line| line.trim_end() == line));
}

#[test]
fn test_example_without_http() {
    let output = generate_example(true);
    let text = output.files[0].text();
    assert!(!text.contains("class Client"));
    assert!(!text.contains("Response(facility.DTO)"));
    assert!(text.contains("class Widget(facility.DTO):"));
}

#[test]
fn test_example_generation_is_stable() {
    assert_eq!(generate_example(false), generate_example(false));
}

#[test]
fn test_empty_service() {
    let output = PythonGenerator::default()
        .generate_output(service("Empty", Vec::new()), Some(Arc::new(HttpServiceInfo::default())))
        .unwrap();
    let text = output.files[0].text();
    assert!(text.contains("class Client(facility.ClientBase):"));
    assert!(text.contains("def __init__(self, base_uri: str, **kwargs):"));
}

#[test]
fn test_method_without_fields_has_no_bare_star() {
    let ping = method("ping", Vec::new());
    let svc = service("PingApi", vec![Arc::clone(&ping)]);
    let http = HttpServiceInfo {
        url: None,
        methods: vec![Arc::new(HttpMethodInfo {
            service_method: ping,
            http_method: "GET".to_string(),
            path: "/ping".to_string(),
            request_header_fields: Vec::new(),
            path_fields: Vec::new(),
            request_body_field: None,
            query_fields: Vec::new(),
            request_normal_fields: Vec::new(),
            responses: Vec::new(),
        })],
    };
    let output = PythonGenerator::default()
        .generate_output(svc, Some(Arc::new(http)))
        .unwrap();
    let text = output.files[0].text();
    assert!(text.contains("    def ping(self) -> facility.Result[PingResponse]:"));
    assert!(text.contains("        request_ = None\n"));
}

#[test]
fn test_unknown_field_type_aborts_generation() {
    let svc = service("Broken", vec![method("go", vec![field("thing", "Gadget")])]);
    let go = Arc::clone(&svc.methods[0]);
    let mut http = HttpMethodInfo {
        service_method: Arc::clone(&go),
        http_method: "POST".to_string(),
        path: "/go".to_string(),
        request_header_fields: Vec::new(),
        path_fields: Vec::new(),
        request_body_field: None,
        query_fields: Vec::new(),
        request_normal_fields: Vec::new(),
        responses: Vec::new(),
    };
    http.request_normal_fields = vec![bind(HttpFieldKind::Normal, &go.request_fields[0])];
    let http_service = HttpServiceInfo {
        url: None,
        methods: vec![Arc::new(http)],
    };
    let err = PythonGenerator::default()
        .generate_output(svc, Some(Arc::new(http_service)))
        .unwrap_err();
    assert!(matches!(err, GenError::Contract(_)));
    assert!(err.to_string().contains("Gadget"));
}

#[test]
fn test_public_http_helpers_on_example() {
    let model = load_example();
    let http = model.http_service.unwrap();
    let get_widget = &http.methods[2];
    let order: Vec<_> = ordered_request_fields(get_widget)
        .iter()
        .map(|f| f.kind)
        .collect();
    assert_eq!(order, [HttpFieldKind::Header, HttpFieldKind::Path]);
    assert_eq!(
        render_path_as_python_fstring(get_widget),
        "f\"/widgets/{facility.encode(id_)}\""
    );
}
