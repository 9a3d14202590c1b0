mod graphql_query_model;
