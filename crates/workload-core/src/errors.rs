use thiserror::Error;

/// Result type alias using WorkloadError
pub type Result<T> = std::result::Result<T, WorkloadError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and tests) can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    MissingField,
    NotFound,
    AlreadyExists,
    ConstraintViolation,

    // Mutation
    CannotDelete,

    // Auth
    Unauthorised,

    // Integration/IO
    Io,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::CannotDelete => "ERR_CANNOT_DELETE",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus the
/// operation and entity context needed to explain the failure to a user.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (an order id or a staff name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for order and staff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkloadError {
    /// No staff member with this name
    #[error("Staff not found: {name}")]
    StaffNotFound { name: String },

    /// No order with this id
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: i64 },

    /// A staff member with this name already exists
    #[error("Staff name already taken: {name}")]
    DuplicateStaffName { name: String },

    /// Staff member still owns work-in-progress orders
    #[error("Staff {name} still holds {open_orders} open order(s)")]
    StaffHasOpenOrders { name: String, open_orders: usize },

    /// A required input was empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A stored status value outside the known set
    #[error("Invalid order status: {value}")]
    InvalidStatus { value: String },
}

/// Conversion from the domain taxonomy to the canonical error facility
impl From<WorkloadError> for ExError {
    fn from(err: WorkloadError) -> Self {
        match err {
            WorkloadError::StaffNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(name)
                .with_message("Staff not found"),

            WorkloadError::OrderNotFound { order_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(order_id.to_string())
                .with_message("Order not found"),

            WorkloadError::DuplicateStaffName { name } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(name)
                    .with_message("Staff name already taken")
            }

            WorkloadError::StaffHasOpenOrders { name, open_orders } => {
                ExError::new(ExErrorKind::CannotDelete)
                    .with_entity_id(name)
                    .with_message(format!("Staff still holds {} open order(s)", open_orders))
            }

            WorkloadError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_message(format!("{} is required", field)),

            WorkloadError::InvalidStatus { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid order status: {}", value)),
        }
    }
}
