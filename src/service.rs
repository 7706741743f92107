use rmcp::{
    ErrorData, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars::{self, JsonSchema},
    tool, tool_handler, tool_router,
};
use serde::Deserialize;

use crate::amap::AmapClient;
use crate::format;
use crate::resolver::Resolver;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetWeatherRequest {
    #[schemars(description = "城市名称，如北京、上海、广州等")]
    pub city: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetRouteRequest {
    #[schemars(description = "起点位置，如北京南站、上海外滩等地点名称")]
    pub origin: String,
    #[schemars(description = "终点位置，如北京西站、上海虹桥火车站等地点名称")]
    pub destination: String,
}

#[derive(Debug, Clone)]
pub struct AmapService {
    tool_router: ToolRouter<Self>,
    client: AmapClient,
    resolver: Resolver,
}

impl AmapService {
    pub fn new(client: AmapClient, resolver: Resolver) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
            resolver,
        }
    }
}

#[tool_router]
impl AmapService {
    #[tool(name = "get-weather", description = "获取中国城市天气预报")]
    pub async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let Some(adcode) = self.resolver.resolve_city_code(&request.city).await else {
            return Ok(failure(format!("未找到城市 {}", request.city)));
        };

        let weather = match self.client.weather_forecast(&adcode).await {
            Ok(response) => response,
            Err(_) => return Ok(failure("获取天气数据失败".to_string())),
        };

        if weather.status != "1" {
            return Ok(failure(format!(
                "请求错误: {} (代码: {})",
                weather.info, weather.infocode
            )));
        }

        if weather.forecasts.is_empty() {
            return Ok(failure(format!("未找到城市 {} 的天气预报", request.city)));
        }

        let blocks = weather
            .forecasts
            .iter()
            .map(format::format_weather_forecast)
            .collect::<Vec<_>>();
        let text = format!("{} 未来天气预报:\n\n{}", request.city, blocks.join("\n\n"));

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(name = "get-route", description = "获取驾车路线规划")]
    pub async fn get_route(
        &self,
        Parameters(request): Parameters<GetRouteRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let Some(origin) = self.resolver.resolve_coordinate(&request.origin).await else {
            return Ok(failure(format!("未找到地点 {}", request.origin)));
        };
        let Some(destination) = self.resolver.resolve_coordinate(&request.destination).await
        else {
            return Ok(failure(format!("未找到地点 {}", request.destination)));
        };

        let driving = match self
            .client
            .driving_route(&origin.location, &destination.location)
            .await
        {
            Ok(response) => response,
            Err(_) => return Ok(failure("获取路线规划数据失败".to_string())),
        };

        if driving.status != "1" {
            return Ok(failure(format!(
                "请求错误: {} (代码: {})",
                driving.info, driving.infocode
            )));
        }

        let Some(report) = driving.route.as_ref().and_then(|route| {
            format::format_driving_route(route, &origin.label, &destination.label)
        }) else {
            return Ok(failure(format!(
                "未找到从 {} 到 {} 的驾车路线",
                request.origin, request.destination
            )));
        };

        let text = format!("驾车路线规划结果:\n\n{}", report);

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for AmapService {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = Implementation::from_build_env();
        if implementation.title.is_none() {
            implementation.title = Some("China Weather & Map MCP Server".into());
        }

        ServerInfo {
            instructions: Some(
                "China weather and driving-route MCP server backed by the AMap web API. Use get-weather with a city name for a multi-day forecast, and get-route with origin and destination place names for driving directions."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: implementation,
            ..Default::default()
        }
    }
}

// Tool failures are reported as error text in the result payload rather
// than protocol-level errors, so the model can read and relay them.
fn failure(message: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message)])
}
