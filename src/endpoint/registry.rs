//! The endpoint table and the [`Endpoint`] enum generated from it.

// self
use crate::{
	_prelude::*,
	endpoint::{EndpointDescriptor, HttpMethod},
};

macro_rules! def_endpoints {
	(@legacy) => { None };
	(@legacy $method:ident) => { Some(HttpMethod::$method) };
	(@credentials) => { false };
	(@credentials $flag:ident) => { true };
	($(
		#[doc = $doc:literal]
		$variant:ident => $name:ident: $method:ident $path:literal
			$(legacy $legacy:ident)? $(with $credentials:ident)?;
	)+) => {
		/// Every operation exposed by the API, in registry order.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum Endpoint {
			$(
				#[doc = $doc]
				$variant,
			)+
		}
		impl Endpoint {
			/// Every registry entry, in declaration order.
			pub const ALL: &'static [Endpoint] = &[$(Endpoint::$variant),+];

			/// Resolves an operation by its snake_case name.
			pub fn from_name(name: &str) -> Option<Self> {
				match name {
					$(stringify!($name) => Some(Endpoint::$variant),)+
					_ => None,
				}
			}
		}

		static DESCRIPTORS: &[EndpointDescriptor] = &[$(
			EndpointDescriptor {
				name: stringify!($name),
				method: HttpMethod::$method,
				path: $path,
				legacy_method: def_endpoints!(@legacy $($legacy)?),
				sends_credentials: def_endpoints!(@credentials $($credentials)?),
			},
		)+];
	};
}

def_endpoints! {
	/// Service liveness probe; needs neither token nor credentials.
	HealthCheck => health_check: Get "/healthcheck";
	/// Authorization code exchange.
	TokenExchange => token_exchange: Post "/oauth/token" with credentials;
	/// Refresh token rotation.
	TokenRefresh => token_refresh: Post "/oauth/token" with credentials;
	/// User sign-up.
	CreateUser => create_user: Post "/users";
	/// Users visible to the token.
	ListUsers => list_users: Get "/users";
	/// Single user.
	GetUser => get_user: Get "/users/{id}";
	/// Person creation.
	CreatePerson => create_person: Post "/people";
	/// People visible to the token.
	ListPeople => list_people: Get "/people";
	/// Single person; the legacy client bound this read to `POST`.
	GetPerson => get_person: Get "/people/{id}" legacy Post;
	/// Partial person update.
	UpdatePerson => update_person: Patch "/people/{id}";
	/// Account opening.
	CreateAccount => create_account: Post "/accounts";
	/// Accounts visible to the token.
	ListAccounts => list_accounts: Get "/accounts";
	/// Single account.
	GetAccount => get_account: Get "/accounts/{id}";
	/// Account types the client may open.
	GetAccountTypes => get_account_types: Get "/accounts/account_types";
	/// Daily account values.
	GetDailyValues => get_daily_values: Get "/daily_values/";
	/// Portfolio projections.
	GetProjection => get_projection: Get "/projections";
	/// Linked bank accounts.
	ListBankAccounts => list_bank_accounts: Get "/bank_accounts";
	/// Deposit creation.
	CreateDeposit => create_deposit: Post "/deposits";
	/// Deposits visible to the token.
	ListDeposits => list_deposits: Get "/deposits";
	/// Single deposit.
	GetDeposit => get_deposit: Get "/deposits/{id}";
}

impl Endpoint {
	/// Returns the static descriptor for the endpoint.
	pub fn descriptor(self) -> &'static EndpointDescriptor {
		&DESCRIPTORS[self as usize]
	}

	/// Operation name.
	pub fn name(self) -> &'static str {
		self.descriptor().name
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.name())
	}
}
