//! Test doubles shared by the unit tests.

use std::sync::Arc;
use std::sync::Mutex;

use reqwest::Url;
use serde_json::Value;
use serde_json::json;

use crate::Client;
use crate::client::transport;
use crate::client::transport::Response;
use crate::client::transport::Transport;
use crate::mapping::Method;
use crate::mapping::UrlMapping;

/// A request seen by a [`ScriptedTransport`].
#[derive(Clone, Debug)]
pub(crate) struct Recorded {
    /// The method.
    method: Method,

    /// The URL path.
    path: String,

    /// The JSON body, for `POST` requests.
    body: Option<Value>,
}

impl Recorded {
    /// Gets the method.
    pub(crate) fn method(&self) -> Method {
        self.method
    }

    /// Gets the URL path.
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// Gets the JSON body.
    pub(crate) fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// A canned response.
#[derive(Clone, Debug)]
struct Route {
    /// The method to match.
    method: Method,

    /// The URL path to match.
    path: String,

    /// Top-level fields the request body must contain.
    when: Value,

    /// The status to answer with.
    status: u16,

    /// The body to answer with.
    body: Value,
}

impl Route {
    /// Returns whether the route answers the given request.
    fn matches(&self, method: Method, path: &str, body: Option<&Value>) -> bool {
        if self.method != method || self.path != path {
            return false;
        }

        match (&self.when, body) {
            (Value::Object(expected), Some(Value::Object(actual))) => expected
                .iter()
                .all(|(key, value)| actual.get(key) == Some(value)),
            (Value::Object(expected), None) => expected.is_empty(),
            _ => false,
        }
    }
}

/// A [`Transport`] answering from a script. The first matching route wins;
/// unmatched requests get a `404`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    /// The routes, in priority order.
    routes: Vec<Route>,

    /// Every request seen so far.
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl ScriptedTransport {
    /// Answers `GET path` with `status` and `body`.
    pub(crate) fn on_get(mut self, path: &str, status: u16, body: Value) -> Self {
        self.routes.push(Route {
            method: Method::Get,
            path: path.to_string(),
            when: json!({}),
            status,
            body,
        });
        self
    }

    /// Answers `POST path` whose body contains every field of `when`.
    pub(crate) fn on_post(mut self, path: &str, when: Value, status: u16, body: Value) -> Self {
        self.routes.push(Route {
            method: Method::Post,
            path: path.to_string(),
            when,
            status,
            body,
        });
        self
    }

    /// Gets a handle to the requests seen so far.
    pub(crate) fn requests(&self) -> Arc<Mutex<Vec<Recorded>>> {
        Arc::clone(&self.requests)
    }

    /// Records a request and finds its answer.
    fn answer(&self, method: Method, url: &Url, body: Option<&Value>) -> Response {
        let path = url.path().to_string();

        self.requests.lock().unwrap().push(Recorded {
            method,
            path: path.clone(),
            body: body.cloned(),
        });

        match self
            .routes
            .iter()
            .find(|route| route.matches(method, &path, body))
        {
            Some(route) => Response::new(route.status, route.body.to_string().into_bytes()),
            None => Response::new(
                404,
                json!({"message": format!("no route for {method} {path}"), "errorCode": 404})
                    .to_string()
                    .into_bytes(),
            ),
        }
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &Url) -> transport::Result<Response> {
        Ok(self.answer(Method::Get, url, None))
    }

    fn post(&self, url: &Url, body: &Value) -> transport::Result<Response> {
        Ok(self.answer(Method::Post, url, Some(body)))
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// A compliant server
////////////////////////////////////////////////////////////////////////////////////////

/// The id of the variant annotation set in the scripted compliance dataset.
pub(crate) const ANNOTATION_SET_ID: &str = "vas0";

/// Builds the `index`th variant annotation in the test region.
pub(crate) fn annotation(index: usize) -> Value {
    json!({
        "id": format!("va{index}"),
        "variantId": format!("v{index}"),
        "variantAnnotationSetId": ANNOTATION_SET_ID,
        "created": "2016-01-01T00:00:00Z",
        "transcriptEffects": [{
            "id": format!("te{index}"),
            "featureId": "NR_046018.2",
            "alternateBases": "A",
            "impact": "MODIFIER",
            "effects": [{"termId": "SO:0001627", "term": "intron_variant"}],
            "hgvsAnnotation": {"transcript": format!("NR_046018.2:n.{index}+1G>A")},
            "analysisResults": []
        }]
    })
}

/// Builds the annotation set in the scripted compliance dataset.
pub(crate) fn annotation_set() -> Value {
    json!({
        "id": ANNOTATION_SET_ID,
        "name": "WASH7P",
        "variantSetId": "vs0",
        "analysis": {
            "id": "a0",
            "type": "VEP",
            "software": ["VEP v82"],
            "attributes": {"attr": {"source": {"values": [{"stringValue": "Ensembl"}]}}}
        }
    })
}

/// Builds the RNA quantification in the scripted compliance dataset.
pub(crate) fn rna_quantification() -> Value {
    json!({
        "id": "rq0",
        "name": "sample",
        "rnaQuantificationSetId": "rqs0",
        "featureSetIds": ["fs0"],
        "readGroupIds": [],
        "programs": []
    })
}

/// A transport serving a small compliance dataset that every case passes
/// against: ten annotations in the test region, paged on request, one
/// annotation set, and one RNA quantification.
///
/// Routes added to the returned transport are only consulted after these,
/// so tweaks should be put in front with [`compliant_server_with()`].
pub(crate) fn compliant_server() -> ScriptedTransport {
    compliant_server_with(ScriptedTransport::default())
}

/// Appends the compliance dataset routes to `transport`.
pub(crate) fn compliant_server_with(transport: ScriptedTransport) -> ScriptedTransport {
    let annotations = (0..10).map(annotation).collect::<Vec<_>>();

    let mut transport = transport
        .on_post(
            "/datasets/search",
            json!({}),
            200,
            json!({"datasets": [{"id": "ds0", "name": "compliance"}]}),
        )
        .on_post(
            "/variantsets/search",
            json!({"datasetId": "ds0"}),
            200,
            json!({"variantSets": [{"id": "vs0", "datasetId": "ds0"}]}),
        )
        .on_post(
            "/variantannotationsets/search",
            json!({"variantSetId": "vs0"}),
            200,
            json!({"variantAnnotationSets": [annotation_set()]}),
        )
        .on_get(
            &format!("/variantannotationsets/{ANNOTATION_SET_ID}"),
            200,
            annotation_set(),
        )
        .on_post(
            "/rnaquantificationsets/search",
            json!({"datasetId": "ds0"}),
            200,
            json!({"rnaQuantificationSets": [{"id": "rqs0", "datasetId": "ds0"}]}),
        )
        .on_post(
            "/rnaquantifications/search",
            json!({"rnaQuantificationSetId": "rqs0"}),
            200,
            json!({"rnaQuantifications": [rna_quantification()]}),
        )
        .on_get("/rnaquantifications/rq0", 200, rna_quantification());

    // One record per page, with the page token naming the next index.
    for (index, annotation) in annotations.iter().enumerate().skip(1) {
        let next = if index + 1 < annotations.len() {
            Value::String((index + 1).to_string())
        } else {
            Value::String(String::new())
        };

        transport = transport.on_post(
            "/variantannotations/search",
            json!({"pageSize": 1, "pageToken": index.to_string()}),
            200,
            json!({"variantAnnotations": [annotation], "nextPageToken": next}),
        );
    }

    transport
        .on_post(
            "/variantannotations/search",
            json!({"pageSize": 1}),
            200,
            json!({"variantAnnotations": [annotations[0]], "nextPageToken": "1"}),
        )
        .on_post(
            "/variantannotations/search",
            json!({"variantAnnotationSetId": ANNOTATION_SET_ID, "referenceName": "1"}),
            200,
            json!({"variantAnnotations": annotations}),
        )
}

/// Creates a client over the given transport.
pub(crate) fn client(transport: ScriptedTransport) -> Client {
    Client::new(
        Url::parse("http://cts.test/").unwrap(),
        UrlMapping::default(),
        transport,
    )
}
