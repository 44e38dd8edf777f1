use crate::{
    abstract_trait::{
        customer::{DynCustomerCommandRepository, DynCustomerQueryRepository},
        order::{DynOrderCommandRepository, DynOrderQueryRepository},
        product::{DynProductCommandRepository, DynProductQueryRepository},
    },
    repository::{
        customer::{CustomerCommandRepository, CustomerQueryRepository},
        order::{OrderCommandRepository, OrderQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

/// Repository container. Every repository receives the pool explicitly at
/// construction; nothing reads a process-wide handle.
#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub customer_query: DynCustomerQueryRepository,
    pub customer_command: DynCustomerCommandRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryRepository")
            .field("order_command", &"OrderCommandRepository")
            .field("product_query", &"ProductQueryRepository")
            .field("product_command", &"ProductCommandRepository")
            .field("customer_query", &"CustomerQueryRepository")
            .field("customer_command", &"CustomerCommandRepository")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let order_query =
            Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;
        let order_command =
            Arc::new(OrderCommandRepository::new(pool.clone())) as DynOrderCommandRepository;
        let product_query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;
        let product_command =
            Arc::new(ProductCommandRepository::new(pool.clone())) as DynProductCommandRepository;
        let customer_query =
            Arc::new(CustomerQueryRepository::new(pool.clone())) as DynCustomerQueryRepository;
        let customer_command =
            Arc::new(CustomerCommandRepository::new(pool)) as DynCustomerCommandRepository;

        Self {
            order_query,
            order_command,
            product_query,
            product_command,
            customer_query,
            customer_command,
        }
    }
}
