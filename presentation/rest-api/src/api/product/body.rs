use poem::{Request, RequestBody};
use poem_openapi::{
    ApiExtractor, ApiExtractorType, ExtractParamOptions, Object,
    payload::{Json, Payload},
    registry::{MetaMediaType, MetaRequest, Registry},
    types::Type,
};
use serde_json::Value;

use business::domain::product::validation::ProductPayload;

/// Product fields accepted by create and update.
///
/// Documents the request shape only. Bodies are read leniently through
/// [`ProductBody`] so that field checks report the first invalid field
/// instead of a JSON decoding error.
#[derive(Debug, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Non-empty product name, unique across the catalog
    pub name: Option<String>,
    /// Unit price, must be greater than zero
    pub price: Option<f64>,
    /// Non-empty category
    pub category: Option<String>,
    /// Stock status
    pub in_stock: Option<bool>,
}

/// Request body that never fails to extract.
///
/// A missing, non-JSON or non-object body yields a payload with every field
/// absent, so the handler still runs and path checks happen first.
pub struct ProductBody(pub ProductPayload);

impl ProductBody {
    fn parse(raw: &[u8]) -> ProductPayload {
        ProductPayload::from(serde_json::from_slice::<Value>(raw).unwrap_or(Value::Null))
    }
}

impl<'a> ApiExtractor<'a> for ProductBody {
    const TYPES: &'static [ApiExtractorType] = &[ApiExtractorType::RequestObject];

    type ParamType = ();
    type ParamRawType = ();

    fn register(registry: &mut Registry) {
        <ProductRequest as Type>::register(registry);
    }

    fn request_meta() -> Option<MetaRequest> {
        Some(MetaRequest {
            description: None,
            content: vec![MetaMediaType {
                content_type: <Json<ProductRequest> as Payload>::CONTENT_TYPE,
                schema: <ProductRequest as Type>::schema_ref(),
            }],
            required: true,
        })
    }

    async fn from_request(
        _request: &'a Request,
        body: &mut RequestBody,
        _param_opts: ExtractParamOptions<Self::ParamType>,
    ) -> poem::Result<Self> {
        let raw = body.take()?.into_bytes().await?;
        Ok(Self(Self::parse(&raw)))
    }
}
