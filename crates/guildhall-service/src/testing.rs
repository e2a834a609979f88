//! In-memory fakes of the ports for service tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use guildhall_core::traits::{GuildSettingsRepository, LinkedAccountRepository, PlatformClient};
use guildhall_core::{
    filter_log_channels, sort_guild_roles, Channel, ChannelKind, DomainError, GuildDetail,
    GuildSettings, GuildSummary, LinkedAccount, PlatformError, PlatformResult, PlatformToken,
    RepoResult, Role, Snowflake, StaffRole, TokenKind, PLATFORM_PROVIDER,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

// ============================================================================
// Builders
// ============================================================================

pub fn guild(id: u64, permissions: &str) -> GuildSummary {
    GuildSummary::new(Snowflake::new(id), format!("Guild {id}")).with_permissions(permissions)
}

pub fn ids(guilds: &[GuildSummary]) -> Vec<u64> {
    guilds.iter().map(|g| g.id.into_inner()).collect()
}

pub fn detail(id: u64, members: Option<u64>, presences: Option<u64>) -> GuildDetail {
    GuildDetail {
        id: Snowflake::new(id),
        name: format!("Guild {id}"),
        icon: None,
        approximate_member_count: members,
        approximate_presence_count: presences,
    }
}

pub fn role(id: u64, name: &str, position: i32) -> Role {
    Role::new(Snowflake::new(id), name.to_string(), position)
}

pub fn channel(id: u64, name: &str, kind: ChannelKind) -> Channel {
    Channel::new(Snowflake::new(id), name.to_string(), kind)
}

pub fn staff_role(id: u64) -> StaffRole {
    StaffRole {
        id: Snowflake::new(id),
        name: format!("role-{id}"),
        color: 0,
        position: 1,
    }
}

pub fn settings_with_staff(guild_id: u64, role_ids: &[u64]) -> GuildSettings {
    let mut settings = GuildSettings::new(Snowflake::new(guild_id));
    settings.staff_roles = role_ids.iter().copied().map(staff_role).collect();
    settings
}

pub fn linked_account(user_id: &str, platform_user_id: u64, token: Option<&str>) -> LinkedAccount {
    LinkedAccount {
        user_id: user_id.to_string(),
        provider: PLATFORM_PROVIDER.to_string(),
        provider_account_id: Snowflake::new(platform_user_id),
        access_token: token.map(str::to_string),
        expires_at: None,
    }
}

// ============================================================================
// Fake platform
// ============================================================================

#[derive(Default)]
struct PlatformState {
    user_guilds: Vec<GuildSummary>,
    user_guilds_error: Option<PlatformError>,
    service_guilds: Vec<GuildSummary>,
    service_guilds_error: Option<PlatformError>,
    details: HashMap<u64, PlatformResult<GuildDetail>>,
    delays: HashMap<u64, Duration>,
    roles: HashMap<u64, Vec<Role>>,
    channels: HashMap<u64, Vec<Channel>>,
    members: HashMap<(u64, u64), PlatformResult<Vec<Snowflake>>>,
    calls: Vec<(&'static str, TokenKind)>,
    in_flight: usize,
    max_in_flight: usize,
}

/// Scriptable platform; unscripted guild lookups answer `NotFound`
#[derive(Clone, Default)]
pub struct FakePlatform {
    state: Arc<Mutex<PlatformState>>,
}

impl FakePlatform {
    fn with(self, f: impl FnOnce(&mut PlatformState)) -> Self {
        f(&mut self.state.lock().unwrap());
        self
    }

    pub fn with_user_guilds(self, guilds: Vec<GuildSummary>) -> Self {
        self.with(|s| s.user_guilds = guilds)
    }

    pub fn failing_user_guilds(self, error: PlatformError) -> Self {
        self.with(|s| s.user_guilds_error = Some(error))
    }

    pub fn with_service_guilds(self, guilds: Vec<GuildSummary>) -> Self {
        self.with(|s| s.service_guilds = guilds)
    }

    pub fn failing_service_guilds(self, error: PlatformError) -> Self {
        self.with(|s| s.service_guilds_error = Some(error))
    }

    pub fn with_detail(self, detail: GuildDetail) -> Self {
        self.add_detail(detail);
        self
    }

    pub fn add_detail(&self, detail: GuildDetail) {
        let mut state = self.state.lock().unwrap();
        state.details.insert(detail.id.into_inner(), Ok(detail));
    }

    pub fn failing_detail(self, guild_id: u64, error: PlatformError) -> Self {
        self.with(|s| {
            s.details.insert(guild_id, Err(error));
        })
    }

    pub fn with_delay(self, guild_id: u64, delay: Duration) -> Self {
        self.add_delay(guild_id, delay);
        self
    }

    pub fn add_delay(&self, guild_id: u64, delay: Duration) {
        self.state.lock().unwrap().delays.insert(guild_id, delay);
    }

    pub fn with_roles(self, guild_id: u64, roles: Vec<Role>) -> Self {
        self.with(|s| {
            s.roles.insert(guild_id, roles);
        })
    }

    pub fn with_channels(self, guild_id: u64, channels: Vec<Channel>) -> Self {
        self.with(|s| {
            s.channels.insert(guild_id, channels);
        })
    }

    pub fn with_member(self, guild_id: u64, user_id: u64, role_ids: &[u64]) -> Self {
        let roles = role_ids.iter().copied().map(Snowflake::new).collect();
        self.with(|s| {
            s.members.insert((guild_id, user_id), Ok(roles));
        })
    }

    pub fn failing_member(self, guild_id: u64, user_id: u64, error: PlatformError) -> Self {
        self.with(|s| {
            s.members.insert((guild_id, user_id), Err(error));
        })
    }

    /// Operations called so far, with the kind of token each one received
    pub fn calls(&self) -> Vec<(&'static str, TokenKind)> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls().iter().filter(|(op, _)| *op == operation).count()
    }

    /// Peak number of concurrent detail fetches
    pub fn max_in_flight(&self) -> usize {
        self.state.lock().unwrap().max_in_flight
    }

    fn record(&self, operation: &'static str, token: &PlatformToken) {
        self.state.lock().unwrap().calls.push((operation, token.kind()));
    }
}

#[async_trait]
impl PlatformClient for FakePlatform {
    async fn fetch_user_guilds(&self, user_token: &PlatformToken) -> PlatformResult<Vec<GuildSummary>> {
        self.record("fetch_user_guilds", user_token);
        let state = self.state.lock().unwrap();
        match &state.user_guilds_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.user_guilds.clone()),
        }
    }

    async fn fetch_service_guilds(
        &self,
        service_token: &PlatformToken,
    ) -> PlatformResult<Vec<GuildSummary>> {
        self.record("fetch_service_guilds", service_token);
        let state = self.state.lock().unwrap();
        match &state.service_guilds_error {
            Some(error) => Err(error.clone()),
            None => Ok(state.service_guilds.clone()),
        }
    }

    async fn fetch_guild_detail(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<GuildDetail> {
        self.record("fetch_guild_detail", service_token);
        let delay = {
            let mut state = self.state.lock().unwrap();
            state.in_flight += 1;
            state.max_in_flight = state.max_in_flight.max(state.in_flight);
            state.delays.get(&guild_id.into_inner()).copied()
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock().unwrap();
        state.in_flight -= 1;
        state
            .details
            .get(&guild_id.into_inner())
            .cloned()
            .unwrap_or(Err(PlatformError::NotFound))
    }

    async fn fetch_guild_roles(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<Vec<Role>> {
        self.record("fetch_guild_roles", service_token);
        let roles = self
            .state
            .lock()
            .unwrap()
            .roles
            .get(&guild_id.into_inner())
            .cloned()
            .ok_or(PlatformError::NotFound)?;
        Ok(sort_guild_roles(roles, guild_id))
    }

    async fn fetch_guild_channels(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
    ) -> PlatformResult<Vec<Channel>> {
        self.record("fetch_guild_channels", service_token);
        let channels = self
            .state
            .lock()
            .unwrap()
            .channels
            .get(&guild_id.into_inner())
            .cloned()
            .ok_or(PlatformError::NotFound)?;
        Ok(filter_log_channels(channels))
    }

    async fn fetch_member_roles(
        &self,
        service_token: &PlatformToken,
        guild_id: Snowflake,
        user_id: Snowflake,
    ) -> PlatformResult<Vec<Snowflake>> {
        self.record("fetch_member_roles", service_token);
        self.state
            .lock()
            .unwrap()
            .members
            .get(&(guild_id.into_inner(), user_id.into_inner()))
            .cloned()
            .unwrap_or(Err(PlatformError::NotFound))
    }
}

// ============================================================================
// In-memory stores
// ============================================================================

#[derive(Default)]
pub struct InMemorySettingsRepo {
    settings: Mutex<HashMap<Snowflake, GuildSettings>>,
    unavailable: Mutex<bool>,
}

impl InMemorySettingsRepo {
    pub fn insert(&self, settings: GuildSettings) {
        self.settings.lock().unwrap().insert(settings.guild_id, settings);
    }

    pub fn get(&self, guild_id: u64) -> Option<GuildSettings> {
        self.settings.lock().unwrap().get(&Snowflake::new(guild_id)).cloned()
    }

    /// Make every subsequent call fail as a database error
    pub fn set_unavailable(&self) {
        *self.unavailable.lock().unwrap() = true;
    }

    fn check(&self) -> RepoResult<()> {
        if *self.unavailable.lock().unwrap() {
            return Err(DomainError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }

    fn upsert(
        &self,
        guild_id: Snowflake,
        updated_by: &str,
        apply: impl FnOnce(&mut GuildSettings),
    ) -> RepoResult<GuildSettings> {
        self.check()?;
        let mut settings = self.settings.lock().unwrap();
        let entry = settings
            .entry(guild_id)
            .or_insert_with(|| GuildSettings::new(guild_id));
        apply(entry);
        entry.last_updated_by = Some(updated_by.to_string());
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }
}

#[async_trait]
impl GuildSettingsRepository for InMemorySettingsRepo {
    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Option<GuildSettings>> {
        self.check()?;
        Ok(self.settings.lock().unwrap().get(&guild_id).cloned())
    }

    async fn upsert_staff_roles(
        &self,
        guild_id: Snowflake,
        staff_roles: &[StaffRole],
        updated_by: &str,
    ) -> RepoResult<GuildSettings> {
        self.upsert(guild_id, updated_by, |s| s.staff_roles = staff_roles.to_vec())
    }

    async fn upsert_log_channel(
        &self,
        guild_id: Snowflake,
        channel_id: Option<Snowflake>,
        updated_by: &str,
    ) -> RepoResult<GuildSettings> {
        self.upsert(guild_id, updated_by, |s| s.log_channel_id = channel_id)
    }
}

#[derive(Default)]
pub struct InMemoryAccountRepo {
    accounts: Mutex<HashMap<(String, String), LinkedAccount>>,
}

impl InMemoryAccountRepo {
    pub fn insert(&self, account: LinkedAccount) {
        let key = (account.user_id.clone(), account.provider.clone());
        self.accounts.lock().unwrap().insert(key, account);
    }
}

#[async_trait]
impl LinkedAccountRepository for InMemoryAccountRepo {
    async fn find_linked_account(
        &self,
        user_id: &str,
        provider: &str,
    ) -> RepoResult<Option<LinkedAccount>> {
        let key = (user_id.to_string(), provider.to_string());
        Ok(self.accounts.lock().unwrap().get(&key).cloned())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

// ============================================================================
// Context
// ============================================================================

/// Assembles a `ServiceContext` over the fakes
pub struct TestContext {
    platform: FakePlatform,
    settings: Arc<InMemorySettingsRepo>,
    accounts: Arc<InMemoryAccountRepo>,
    bot_token: Option<String>,
    concurrency: usize,
}

impl TestContext {
    pub fn new(platform: FakePlatform) -> Self {
        Self {
            platform,
            settings: Arc::new(InMemorySettingsRepo::default()),
            accounts: Arc::new(InMemoryAccountRepo::default()),
            bot_token: Some("bot-secret".to_string()),
            concurrency: 8,
        }
    }

    pub fn with_settings(self, settings: GuildSettings) -> Self {
        self.settings.insert(settings);
        self
    }

    pub fn with_account(self, account: LinkedAccount) -> Self {
        self.accounts.insert(account);
        self
    }

    pub fn without_bot_token(mut self) -> Self {
        self.bot_token = None;
        self
    }

    pub fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit;
        self
    }

    /// Shared handle on the settings store, to inspect writes
    pub fn settings_repo(&self) -> Arc<InMemorySettingsRepo> {
        Arc::clone(&self.settings)
    }

    pub fn build(self) -> ServiceContext {
        ServiceContextBuilder::new()
            .settings_repo(self.settings)
            .account_repo(self.accounts)
            .platform(Arc::new(self.platform))
            .bot_token(self.bot_token)
            .enrichment_concurrency(self.concurrency)
            .build()
            .unwrap()
    }
}
