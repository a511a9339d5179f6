/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use anyhow::bail;
use reqwest::blocking::RequestBuilder;
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub struct Client {
	client: reqwest::blocking::Client,
	base_url: String,
	api_key: Option<String>,
}

impl Client {
	pub fn new(base_url: &str, api_key: Option<String>) -> Self {
		Client {
			client: reqwest::blocking::Client::new(),
			base_url: base_url.to_string(),
			api_key,
		}
	}

	/// Sends a GET and handles the response. Errors on non-2xx codes.
	pub fn get<Q, R>(
		&self,
		endpoint: &str,
		query_params: Option<Q>,
	) -> Result<R, anyhow::Error>
	where
		Q: Serialize,
		R: for<'de> Deserialize<'de>,
	{
		let mut request = self.request(Method::GET, endpoint);
		if let Some(query_params) = query_params {
			request = request.query(&query_params);
		}
		Client::handle(request)
	}

	/// Sends a POST with a JSON body. Errors on non-2xx codes.
	pub fn post<B, R>(
		&self,
		endpoint: &str,
		body: &B,
	) -> Result<R, anyhow::Error>
	where
		B: Serialize,
		R: for<'de> Deserialize<'de>,
	{
		Client::handle(self.request(Method::POST, endpoint).json(body))
	}

	/// Sends a DELETE. Errors on non-2xx codes.
	pub fn delete<R>(&self, endpoint: &str) -> Result<R, anyhow::Error>
	where
		R: for<'de> Deserialize<'de>,
	{
		Client::handle(self.request(Method::DELETE, endpoint))
	}

	fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
		let url = format!("{}/{}", self.base_url, endpoint);
		let mut request = self.client.request(method, &url);

		if let Some(key) = &self.api_key {
			request = request.header(
				"Authorization",
				format!("Bearer {}", key),
			);
		}

		request
	}

	fn handle<R>(request: RequestBuilder) -> Result<R, anyhow::Error>
	where
		R: for<'de> Deserialize<'de>,
	{
		let response = request.send()?;

		// Handle non-2xx response codes
		if !response.status().is_success() {
			bail!("Request failed with status: {}", response.status());
		}

		let response_data: R = response.json()?;
		Ok(response_data)
	}
}
